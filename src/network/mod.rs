//! Network layer: adapter types and the OS configuration interface.
//!
//! This module provides:
//! - Adapter and configuration types ([`AdapterDescriptor`], [`AdapterConfiguration`],
//!   [`AdapterRecord`])
//! - The collaborator trait ([`AdapterProvider`]) and its error type
//! - The `" - "` DNS list text form ([`parse_dns_list`], [`format_dns_list`])
//! - Platform-specific implementations ([`platform`])

mod adapter;
mod dns;
pub mod platform;
mod provider;

pub use adapter::{AdapterConfiguration, AdapterDescriptor, AdapterRecord, AddressingMode};
pub use dns::{DNS_DELIMITER, format_dns_list, parse_dns_list};
#[cfg(test)]
pub use provider::mock;
pub use provider::{AdapterProvider, ConfigStep, ProviderError, STATUS_SUCCESS, StatusCode};
