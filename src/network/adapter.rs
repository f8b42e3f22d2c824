//! Core types describing adapters and their IP configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an adapter obtains its IPv4 address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressingMode {
    /// Address, gateway and DNS are assigned automatically.
    #[default]
    Dhcp,
    /// Address, mask, gateway and DNS are set by hand.
    Static,
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dhcp => write!(f, "DHCP"),
            Self::Static => write!(f, "Static"),
        }
    }
}

/// An adapter as presented to the user.
///
/// The index is only meaningful within the enumeration it came from;
/// adapters may appear or disappear before it is used again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterDescriptor {
    /// Position in the enumeration snapshot.
    pub index: usize,
    /// Human-readable adapter name.
    pub description: String,
}

impl AdapterDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(index: usize, description: impl Into<String>) -> Self {
        Self {
            index,
            description: description.into(),
        }
    }
}

impl fmt::Display for AdapterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.index, self.description)
    }
}

/// IP configuration of an adapter, either as read or as desired.
///
/// Absent values are `None` rather than placeholder text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfiguration {
    /// Addressing mode.
    pub mode: AddressingMode,
    /// IP address.
    pub address: Option<String>,
    /// Subnet mask.
    pub subnet_mask: Option<String>,
    /// Default gateway.
    pub gateway: Option<String>,
    /// DNS servers in search order.
    pub dns_servers: Vec<String>,
}

impl AdapterConfiguration {
    /// A configuration requesting automatic addressing and automatic DNS.
    #[must_use]
    pub fn dhcp() -> Self {
        Self::default()
    }

    /// A fully specified static configuration.
    #[must_use]
    pub fn static_ip(
        address: impl Into<String>,
        subnet_mask: impl Into<String>,
        gateway: impl Into<String>,
        dns_servers: Vec<String>,
    ) -> Self {
        Self {
            mode: AddressingMode::Static,
            address: Some(address.into()),
            subnet_mask: Some(subnet_mask.into()),
            gateway: Some(gateway.into()),
            dns_servers,
        }
    }
}

/// One adapter exactly as the collaborator reports it.
///
/// Every list keeps the collaborator's order. `interface` is the handle
/// used when issuing change requests for this adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterRecord {
    /// Human-readable adapter description.
    pub description: String,
    /// Platform handle (interface alias on Windows).
    pub interface: String,
    /// Whether automatic addressing is currently on.
    pub dhcp_enabled: bool,
    /// Assigned IP addresses.
    pub addresses: Vec<String>,
    /// Subnet masks, parallel to `addresses`.
    pub subnet_masks: Vec<String>,
    /// Default gateways.
    pub gateways: Vec<String>,
    /// DNS servers in search order.
    pub dns_servers: Vec<String>,
}

impl AdapterRecord {
    /// Creates a record with no addressing information.
    #[must_use]
    pub fn new(description: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            interface: interface.into(),
            ..Self::default()
        }
    }

    /// Returns the configuration currently held by this adapter.
    ///
    /// Only the first address, mask and gateway are kept.
    #[must_use]
    pub fn configuration(&self) -> AdapterConfiguration {
        AdapterConfiguration {
            mode: if self.dhcp_enabled {
                AddressingMode::Dhcp
            } else {
                AddressingMode::Static
            },
            address: first_non_empty(&self.addresses),
            subnet_mask: first_non_empty(&self.subnet_masks),
            gateway: first_non_empty(&self.gateways),
            dns_servers: self.dns_servers.clone(),
        }
    }
}

fn first_non_empty(values: &[String]) -> Option<String> {
    values.first().filter(|v| !v.is_empty()).cloned()
}
