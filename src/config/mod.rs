//! Configuration layer for ipchanger.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`ApplyArgs`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - `--config`, or `<config_dir>/ipchanger/config.toml` if present
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! `--verbose` uses OR semantics: set in either source, verbose logging is on.
//!
//! # Form defaults
//!
//! The `[form]` section only seeds the text of the static fields. It never
//! changes an adapter by itself, and its values are not checked for address
//! syntax.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{ApplyArgs, Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
