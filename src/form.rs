//! Editable configuration form and its DHCP/static state machine.
//!
//! The form starts in DHCP mode with read-only fields. Selecting static
//! mode makes the fields editable; going back to DHCP makes them read-only
//! again without clearing their text.

use std::fmt;

use crate::manager::ValidationError;
use crate::network::{AdapterConfiguration, AddressingMode, format_dns_list, parse_dns_list};

/// One of the four text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// IP address.
    Address,
    /// Subnet mask.
    SubnetMask,
    /// Default gateway.
    Gateway,
    /// DNS servers joined with `" - "`.
    Dns,
}

impl FormField {
    /// Every field, in display and validation order.
    pub const ALL: [Self; 4] = [Self::Address, Self::SubnetMask, Self::Gateway, Self::Dns];

    /// Label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Address => "IP address",
            Self::SubnetMask => "Subnet mask",
            Self::Gateway => "Gateway",
            Self::Dns => "DNS (separated by \" - \")",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Address => 0,
            Self::SubnetMask => 1,
            Self::Gateway => 2,
            Self::Dns => 3,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Address => "IP address",
            Self::SubnetMask => "subnet mask",
            Self::Gateway => "gateway",
            Self::Dns => "DNS servers",
        };
        f.write_str(name)
    }
}

/// Initial text of the four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub address: String,
    pub subnet_mask: String,
    pub gateway: String,
    pub dns: String,
}

/// Form state: the selected mode plus the text of each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigForm {
    mode: AddressingMode,
    values: [String; 4],
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self::new(FormValues::default())
    }
}

impl ConfigForm {
    /// Creates a form in DHCP mode holding the given text.
    #[must_use]
    pub fn new(values: FormValues) -> Self {
        Self {
            mode: AddressingMode::Dhcp,
            values: [values.address, values.subnet_mask, values.gateway, values.dns],
        }
    }

    /// Currently selected mode.
    #[must_use]
    pub const fn mode(&self) -> AddressingMode {
        self.mode
    }

    /// Selects a mode. Field text is kept either way.
    ///
    /// Returns `true` if the mode changed.
    pub fn select_mode(&mut self, mode: AddressingMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    /// Whether the text fields accept input.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self.mode, AddressingMode::Static)
    }

    /// Current text of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.slot()]
    }

    /// Appends a character. Ignored while the fields are read-only.
    ///
    /// Returns `true` if the text changed.
    pub fn insert_char(&mut self, field: FormField, c: char) -> bool {
        if !self.is_editable() || c.is_control() {
            return false;
        }
        self.values[field.slot()].push(c);
        true
    }

    /// Removes the last character. Ignored while the fields are read-only.
    ///
    /// Returns `true` if the text changed.
    pub fn backspace(&mut self, field: FormField) -> bool {
        self.is_editable() && self.values[field.slot()].pop().is_some()
    }

    /// Replaces every field with the configuration read from an adapter.
    ///
    /// Absent values become empty text. The mode is left unchanged.
    pub fn load(&mut self, config: &AdapterConfiguration) {
        self.values = [
            config.address.clone().unwrap_or_default(),
            config.subnet_mask.clone().unwrap_or_default(),
            config.gateway.clone().unwrap_or_default(),
            format_dns_list(&config.dns_servers),
        ];
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        self.values = Default::default();
    }

    /// Builds the configuration to apply.
    ///
    /// In static mode every field must be non-empty after trimming; fields
    /// are checked in display order and the first blank one is reported.
    /// Values are otherwise passed through unvalidated.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] naming the first blank field.
    pub fn desired(&self) -> Result<AdapterConfiguration, ValidationError> {
        if self.mode == AddressingMode::Dhcp {
            return Ok(AdapterConfiguration::dhcp());
        }

        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
        {
            return Err(ValidationError::EmptyField(field));
        }

        Ok(AdapterConfiguration::static_ip(
            self.value(FormField::Address).trim(),
            self.value(FormField::SubnetMask).trim(),
            self.value(FormField::Gateway).trim(),
            parse_dns_list(self.value(FormField::Dns).trim()),
        ))
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
