//! Placeholder provider for platforms without an implementation.

use crate::network::{AdapterProvider, AdapterRecord, ProviderError, StatusCode};

/// Provider that refuses every request.
///
/// Lets the window start on any platform and report enumeration failure
/// as a warning instead of refusing to build.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedProvider {
    _private: (),
}

impl UnsupportedProvider {
    /// Creates a new unsupported-platform provider.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    const fn error() -> ProviderError {
        ProviderError::Unsupported {
            platform: std::env::consts::OS,
        }
    }
}

impl AdapterProvider for UnsupportedProvider {
    fn enumerate_ip_enabled(&self) -> Result<Vec<AdapterRecord>, ProviderError> {
        Err(Self::error())
    }

    fn enable_automatic_addressing(
        &self,
        _adapter: &AdapterRecord,
    ) -> Result<StatusCode, ProviderError> {
        Err(Self::error())
    }

    fn clear_dns_search_order(
        &self,
        _adapter: &AdapterRecord,
    ) -> Result<StatusCode, ProviderError> {
        Err(Self::error())
    }

    fn enable_static_addressing(
        &self,
        _adapter: &AdapterRecord,
        _address: &str,
        _subnet_mask: &str,
    ) -> Result<StatusCode, ProviderError> {
        Err(Self::error())
    }

    fn set_default_gateway(
        &self,
        _adapter: &AdapterRecord,
        _gateway: &str,
    ) -> Result<StatusCode, ProviderError> {
        Err(Self::error())
    }

    fn set_dns_search_order(
        &self,
        _adapter: &AdapterRecord,
        _servers: &[String],
    ) -> Result<StatusCode, ProviderError> {
        Err(Self::error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_reports_current_platform() {
        let error = UnsupportedProvider::new().enumerate_ip_enabled().unwrap_err();

        assert!(matches!(
            error,
            ProviderError::Unsupported { platform } if platform == std::env::consts::OS
        ));
    }

    #[test]
    fn change_requests_are_refused() {
        let provider = UnsupportedProvider::default();
        let adapter = AdapterRecord::new("eth0", "eth0");

        assert!(provider.enable_automatic_addressing(&adapter).is_err());
        assert!(provider.set_dns_search_order(&adapter, &[]).is_err());
    }
}
