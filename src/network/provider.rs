//! The collaborator contract: enumerating adapters and issuing change requests.

use std::fmt;

use thiserror::Error;

use super::AdapterRecord;

/// Status returned by a change request. Zero means success.
pub type StatusCode = u32;

/// Status code reported for a successful change request.
pub const STATUS_SUCCESS: StatusCode = 0;

/// Error type for provider operations.
///
/// Describes a request that could not be issued at all. A request that was
/// issued but refused is reported through a non-zero [`StatusCode`] instead.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// Permission denied to access or change network configuration.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },

    /// No provider exists for the current platform.
    #[error("Adapter configuration is not supported on {platform}")]
    Unsupported {
        /// Name of the current platform.
        platform: &'static str,
    },

    /// A helper program could not be started.
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Individual change request issued while applying a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigStep {
    /// Switch the adapter to automatic addressing.
    EnableAutomaticAddressing,
    /// Reset the DNS search order to automatic.
    ClearDnsSearchOrder,
    /// Set a static address and subnet mask.
    EnableStaticAddressing,
    /// Set the default gateway.
    SetDefaultGateway,
    /// Set the DNS search order.
    SetDnsSearchOrder,
}

impl fmt::Display for ConfigStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EnableAutomaticAddressing => "enable DHCP",
            Self::ClearDnsSearchOrder => "reset DNS servers",
            Self::EnableStaticAddressing => "set static address",
            Self::SetDefaultGateway => "set default gateway",
            Self::SetDnsSearchOrder => "set DNS servers",
        };
        f.write_str(text)
    }
}

/// Trait for the OS network-configuration interface.
///
/// # Design
///
/// - Mirrors the OS contract one call per method; sequencing and
///   success policy belong to the caller
/// - Enables dependency injection for testing with mock implementations
/// - Platform-specific implementations provided in [`super::platform`]
///
/// Calls are blocking and made from the UI thread, so no `Send`/`Sync`
/// bound is required.
pub trait AdapterProvider {
    /// Lists every adapter with IP addressing enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the adapter list cannot be obtained.
    ///
    /// # Implementation Notes
    ///
    /// - Order must be the platform's native order; callers index into it
    /// - Adapters without IP addressing must be left out
    fn enumerate_ip_enabled(&self) -> Result<Vec<AdapterRecord>, ProviderError>;

    /// Turns on automatic addressing.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the request could not be issued.
    fn enable_automatic_addressing(
        &self,
        adapter: &AdapterRecord,
    ) -> Result<StatusCode, ProviderError>;

    /// Drops any explicit DNS search order so DNS is obtained automatically.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the request could not be issued.
    fn clear_dns_search_order(&self, adapter: &AdapterRecord)
    -> Result<StatusCode, ProviderError>;

    /// Sets a static address and subnet mask.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the request could not be issued.
    fn enable_static_addressing(
        &self,
        adapter: &AdapterRecord,
        address: &str,
        subnet_mask: &str,
    ) -> Result<StatusCode, ProviderError>;

    /// Replaces the default gateway.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the request could not be issued.
    fn set_default_gateway(
        &self,
        adapter: &AdapterRecord,
        gateway: &str,
    ) -> Result<StatusCode, ProviderError>;

    /// Replaces the DNS search order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the request could not be issued.
    fn set_dns_search_order(
        &self,
        adapter: &AdapterRecord,
        servers: &[String],
    ) -> Result<StatusCode, ProviderError>;
}
