//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::form::FormValues;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config,
/// or [`ValidatedConfig::load`] to also locate and read the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Initial text of the static fields
    pub form: FormValues,

    /// Log file path. If `None`, the window discards log output and
    /// subcommands log to stderr.
    pub log_file: Option<PathBuf>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let log_file_str = self
            .log_file
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ address: {}, subnet_mask: {}, gateway: {}, dns: {}, log_file: {}, verbose: {} }}",
            self.form.address,
            self.form.subnet_mask,
            self.form.gateway,
            self.form.dns,
            log_file_str,
            self.verbose,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file path points at a directory.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let form = Self::resolve_form(toml);
        let log_file = Self::resolve_log_file(cli, toml)?;

        // Flags only enable
        let verbose = cli.verbose || toml.is_some_and(|t| t.logging.verbose);

        Ok(Self {
            form,
            log_file,
            verbose,
        })
    }

    /// Loads and merges configuration from CLI and the config file.
    ///
    /// If `cli.config` is set, that file must exist. Otherwise the file at
    /// [`defaults::config_path`] is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_fallback(cli, defaults::config_path().as_deref())
    }

    /// Like [`load`](Self::load), with an explicit fallback config path.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_fallback(cli: &Cli, fallback: Option<&Path>) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else if let Some(path) = fallback.filter(|p| p.is_file()) {
            tracing::debug!("Using config file {}", path.display());
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_form(toml: Option<&TomlConfig>) -> FormValues {
        let mut form = defaults::form_values();

        if let Some(section) = toml.map(|t| &t.form) {
            let overrides = [
                (&mut form.address, &section.address),
                (&mut form.subnet_mask, &section.subnet_mask),
                (&mut form.gateway, &section.gateway),
                (&mut form.dns, &section.dns),
            ];
            for (slot, value) in overrides {
                if let Some(value) = value {
                    slot.clone_from(value);
                }
            }
        }

        form
    }

    fn resolve_log_file(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<PathBuf>, ConfigError> {
        // CLI takes precedence
        let Some(path) = cli
            .log_file
            .as_deref()
            .or_else(|| toml.and_then(|t| t.logging.file.as_deref()))
        else {
            return Ok(None);
        };

        let path = expand_home(path);
        if path.is_dir() {
            return Err(ConfigError::InvalidLogFile {
                path,
                reason: "path is a directory",
            });
        }

        Ok(Some(path))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
