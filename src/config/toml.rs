//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Initial text of the static fields
    #[serde(default)]
    pub form: FormSection,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Form defaults section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSection {
    /// Static IP address
    pub address: Option<String>,

    /// Subnet mask
    pub subnet_mask: Option<String>,

    /// Default gateway
    pub gateway: Option<String>,

    /// DNS servers separated by `" - "`
    pub dns: Option<String>,
}

/// Logging configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Log file path
    pub file: Option<PathBuf>,

    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# ipchanger Configuration File
#
# Loaded from --config, or from <config dir>/ipchanger/config.toml if it exists.

[form]
# Initial text of the static-mode fields. Nothing is applied until you
# select an adapter, switch to Static and press Apply.
address = "192.168.1.100"
subnet_mask = "255.255.255.0"
gateway = "192.168.1.1"

# DNS servers, separated by " - " (space, dash, space)
dns = "8.8.8.8 - 8.8.4.4"

[logging]
# Log file (the interactive window discards log output when unset)
# file = "ipchanger.log"

# Enable debug-level logging (same as --verbose)
# verbose = false
"#
    .to_string()
}
