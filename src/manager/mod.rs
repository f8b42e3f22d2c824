//! Adapter configuration manager.
//!
//! Wraps an [`AdapterProvider`] with the three user-facing operations:
//! listing adapters, reading one adapter's configuration, and applying a
//! DHCP or static configuration to it.
//!
//! # Adapter resolution
//!
//! Descriptors carry the index from the enumeration that produced them.
//! Every read or apply enumerates again and looks the index up; if the
//! adapter at that position has a different description, the descriptor is
//! reported as stale ([`ManagerError::Lookup`]) instead of touching
//! whichever adapter now occupies the slot.

mod error;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use error::{FailureCause, ManagerError, StepFailure, ValidationError};

use crate::form::FormField;
use crate::network::{
    AdapterConfiguration, AdapterDescriptor, AdapterProvider, AdapterRecord, AddressingMode,
    ConfigStep, ProviderError, STATUS_SUCCESS, StatusCode, format_dns_list,
};

/// Lists, reads and configures adapters through an [`AdapterProvider`].
#[derive(Debug)]
pub struct AdapterManager<P> {
    provider: P,
}

impl<P: AdapterProvider> AdapterManager<P> {
    /// Creates a manager over the given provider.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the underlying provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Lists IP-enabled adapters in the order the provider reports them.
    ///
    /// An empty list is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::Unavailable`] if enumeration fails.
    pub fn list_adapters(&self) -> Result<Vec<AdapterDescriptor>, ManagerError> {
        let records = self.enumerate()?;

        Ok(records
            .into_iter()
            .enumerate()
            .map(|(index, record)| AdapterDescriptor::new(index, record.description))
            .collect())
    }

    /// Reads the current configuration of an adapter.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::Unavailable`] if enumeration fails
    /// - [`ManagerError::Lookup`] if the descriptor no longer resolves
    pub fn read_configuration(
        &self,
        descriptor: &AdapterDescriptor,
    ) -> Result<AdapterConfiguration, ManagerError> {
        let record = self.resolve(descriptor)?;
        let config = record.configuration();

        tracing::debug!(
            adapter = %descriptor,
            mode = %config.mode,
            address = config.address.as_deref().unwrap_or(""),
            gateway = config.gateway.as_deref().unwrap_or(""),
            dns = %format_dns_list(&config.dns_servers),
            "Read adapter configuration"
        );

        Ok(config)
    }

    /// Applies a configuration to an adapter.
    ///
    /// - DHCP: enables automatic addressing and clears the DNS search order.
    /// - Static: sets address and mask, then the gateway, then the DNS search
    ///   order.
    ///
    /// Every request of the chosen mode is issued even if an earlier one
    /// fails, and nothing is rolled back.
    ///
    /// # Errors
    ///
    /// - [`ManagerError::Validation`] if a static field is blank (nothing is
    ///   sent to the provider)
    /// - [`ManagerError::Unavailable`] / [`ManagerError::Lookup`] if the
    ///   adapter cannot be resolved
    /// - [`ManagerError::Configuration`] listing every failed request
    pub fn apply_configuration(
        &self,
        descriptor: &AdapterDescriptor,
        desired: &AdapterConfiguration,
    ) -> Result<(), ManagerError> {
        if desired.mode == AddressingMode::Static {
            validate_static(desired)?;
        }

        let record = self.resolve(descriptor)?;

        let failures = match desired.mode {
            AddressingMode::Dhcp => self.apply_dhcp(&record),
            AddressingMode::Static => self.apply_static(&record, desired),
        };

        if failures.is_empty() {
            tracing::info!(adapter = %descriptor, mode = %desired.mode, "Configuration applied");
            Ok(())
        } else {
            tracing::warn!(
                adapter = %descriptor,
                failed = failures.len(),
                "Configuration partially or wholly rejected"
            );
            Err(ManagerError::Configuration { failures })
        }
    }

    fn apply_dhcp(&self, record: &AdapterRecord) -> Vec<StepFailure> {
        let results = [
            (
                ConfigStep::EnableAutomaticAddressing,
                self.provider.enable_automatic_addressing(record),
            ),
            (
                ConfigStep::ClearDnsSearchOrder,
                self.provider.clear_dns_search_order(record),
            ),
        ];
        collect_failures(results)
    }

    fn apply_static(&self, record: &AdapterRecord, desired: &AdapterConfiguration) -> Vec<StepFailure> {
        let address = desired.address.as_deref().unwrap_or_default();
        let subnet_mask = desired.subnet_mask.as_deref().unwrap_or_default();
        let gateway = desired.gateway.as_deref().unwrap_or_default();

        let results = [
            (
                ConfigStep::EnableStaticAddressing,
                self.provider
                    .enable_static_addressing(record, address, subnet_mask),
            ),
            (
                ConfigStep::SetDefaultGateway,
                self.provider.set_default_gateway(record, gateway),
            ),
            (
                ConfigStep::SetDnsSearchOrder,
                self.provider
                    .set_dns_search_order(record, &desired.dns_servers),
            ),
        ];
        collect_failures(results)
    }

    fn enumerate(&self) -> Result<Vec<AdapterRecord>, ManagerError> {
        self.provider.enumerate_ip_enabled().map_err(|e| {
            tracing::warn!("Adapter enumeration failed: {e}");
            ManagerError::Unavailable(e)
        })
    }

    fn resolve(&self, descriptor: &AdapterDescriptor) -> Result<AdapterRecord, ManagerError> {
        let record = self
            .enumerate()?
            .into_iter()
            .nth(descriptor.index)
            .filter(|r| r.description == descriptor.description);

        record.ok_or_else(|| {
            tracing::warn!(adapter = %descriptor, "Adapter no longer resolves");
            ManagerError::Lookup {
                descriptor: descriptor.clone(),
            }
        })
    }
}

/// Checks that every static field is present and non-blank.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] naming the first blank field.
pub fn validate_static(config: &AdapterConfiguration) -> Result<(), ValidationError> {
    let blank = |value: Option<&str>| value.is_none_or(|v| v.trim().is_empty());

    if blank(config.address.as_deref()) {
        return Err(ValidationError::EmptyField(FormField::Address));
    }
    if blank(config.subnet_mask.as_deref()) {
        return Err(ValidationError::EmptyField(FormField::SubnetMask));
    }
    if blank(config.gateway.as_deref()) {
        return Err(ValidationError::EmptyField(FormField::Gateway));
    }
    if config.dns_servers.iter().all(|s| s.trim().is_empty()) {
        return Err(ValidationError::EmptyField(FormField::Dns));
    }
    Ok(())
}

fn collect_failures<const N: usize>(
    results: [(ConfigStep, Result<StatusCode, ProviderError>); N],
) -> Vec<StepFailure> {
    results
        .into_iter()
        .filter_map(|(step, result)| {
            let cause = match result {
                Ok(STATUS_SUCCESS) => return None,
                Ok(status) => FailureCause::Status(status),
                Err(e) => FailureCause::Unavailable(e.to_string()),
            };
            tracing::debug!(%step, ?cause, "Change request failed");
            Some(StepFailure { step, cause })
        })
        .collect()
}
