//! ipchanger: switch a network adapter between DHCP and static addressing
//!
//! Entry point for the ipchanger application.

use ipchanger::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    if let Err(e) = setup_tracing(
        config.verbose,
        config.log_file.as_deref(),
        cli.is_interactive(),
    ) {
        eprintln!("Failed to open log file: {e}");
        return exit_code::CONFIG_ERROR;
    }
    tracing::debug!("{config}");

    run_application(cli.command, &config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs the requested command with the given configuration.
///
/// Excluded from coverage - requires platform APIs.
#[cfg(not(tarpaulin_include))]
fn run_application(command: Option<Command>, config: &ValidatedConfig) -> ExitCode {
    match run::execute(command, config) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Application error: {e}");
            eprintln!("Error: {e}");
            if e.is_user_error() {
                exit_code::CONFIG_ERROR
            } else {
                exit_code::runtime_error()
            }
        }
    }
}
