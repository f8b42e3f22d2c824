//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use ipchanger::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - bad config file, unknown adapter index, blank field.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - enumeration failure, refused change request, terminal error.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } | ConfigError::TomlParse(_) => {
            eprintln!("\nRun 'ipchanger init' to generate a configuration template.");
        }
        ConfigError::InvalidLogFile { .. } => {
            eprintln!("\nPass --log-file with a file path, or remove [logging].file.");
        }
        ConfigError::FileWrite { .. } => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to `log_file` when one is configured. Otherwise the window
/// discards them, since it owns the terminal, and subcommands log to
/// stderr so stdout carries only their output.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn setup_tracing(verbose: bool, log_file: Option<&Path>, interactive: bool) -> io::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match (log_file, interactive) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, true) => builder.with_writer(io::sink).init(),
        (None, false) => builder.with_writer(io::stderr).init(),
    }

    Ok(())
}
