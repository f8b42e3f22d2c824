//! Non-interactive subcommands: `list`, `show` and `apply`.
//!
//! Each command runs against an [`AdapterManager`] and writes its result to
//! the given writer, as plain text or as JSON.

use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use crate::config::ApplyArgs;
use crate::form::{ConfigForm, FormValues};
use crate::manager::{AdapterManager, ManagerError};
use crate::network::{
    AdapterConfiguration, AdapterDescriptor, AdapterProvider, format_dns_list,
};

/// Error type for subcommand execution.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The index given on the command line is not in the adapter list.
    #[error("No adapter at index {index} ({count} adapter(s) found); run 'ipchanger list'")]
    NoSuchAdapter {
        /// Requested index
        index: usize,
        /// Number of adapters currently listed
        count: usize,
    },

    /// Listing, reading or applying failed.
    #[error(transparent)]
    Manager(#[from] ManagerError),

    /// JSON encoding failed.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CommandError {
    /// Returns `true` if the command line itself was at fault.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::NoSuchAdapter { .. } => true,
            Self::Manager(e) => e.is_user_error(),
            Self::Json(_) | Self::Output(_) => false,
        }
    }
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    adapter: &'a AdapterDescriptor,
    configuration: &'a AdapterConfiguration,
}

/// Prints every IP-enabled adapter with its index.
///
/// # Errors
///
/// Returns [`CommandError`] if enumeration or writing fails.
pub fn list<P: AdapterProvider, W: Write>(
    manager: &AdapterManager<P>,
    out: &mut W,
    json: bool,
) -> Result<(), CommandError> {
    let adapters = manager.list_adapters()?;
    tracing::debug!(count = adapters.len(), "Listed adapters");

    if json {
        serde_json::to_writer_pretty(&mut *out, &adapters)?;
        writeln!(out)?;
        return Ok(());
    }

    if adapters.is_empty() {
        writeln!(out, "No IP-enabled network adapter found")?;
        return Ok(());
    }

    for adapter in &adapters {
        writeln!(out, "{:>3}  {}", adapter.index, adapter.description)?;
    }
    Ok(())
}

/// Prints the current configuration of the adapter at `index`.
///
/// # Errors
///
/// Returns [`CommandError::NoSuchAdapter`] for an unknown index, or
/// another [`CommandError`] if reading or writing fails.
pub fn show<P: AdapterProvider, W: Write>(
    manager: &AdapterManager<P>,
    index: usize,
    out: &mut W,
    json: bool,
) -> Result<(), CommandError> {
    let adapter = adapter_at(manager, index)?;
    let configuration = manager.read_configuration(&adapter)?;

    if json {
        let output = ShowOutput {
            adapter: &adapter,
            configuration: &configuration,
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        return Ok(());
    }

    let none = || "(none)".to_string();
    writeln!(out, "Adapter:      {}", adapter.description)?;
    writeln!(out, "Mode:         {}", configuration.mode)?;
    writeln!(
        out,
        "IP address:   {}",
        configuration.address.clone().unwrap_or_else(none)
    )?;
    writeln!(
        out,
        "Subnet mask:  {}",
        configuration.subnet_mask.clone().unwrap_or_else(none)
    )?;
    writeln!(
        out,
        "Gateway:      {}",
        configuration.gateway.clone().unwrap_or_else(none)
    )?;
    let dns = if configuration.dns_servers.is_empty() {
        none()
    } else {
        format_dns_list(&configuration.dns_servers)
    };
    writeln!(out, "DNS servers:  {dns}")?;
    Ok(())
}

/// Applies the configuration described by `args` to an adapter.
///
/// Static fields missing from `args` are taken from `defaults`, then
/// validated the same way the interactive form validates them.
///
/// # Errors
///
/// Returns [`CommandError`] if the index is unknown, a static field is
/// blank, or any change request fails.
pub fn apply<P: AdapterProvider, W: Write>(
    manager: &AdapterManager<P>,
    args: &ApplyArgs,
    defaults: &FormValues,
    out: &mut W,
) -> Result<(), CommandError> {
    let mut form = ConfigForm::new(args.form_values(defaults));
    form.select_mode(args.mode());
    let desired = form.desired().map_err(ManagerError::from)?;

    let adapter = adapter_at(manager, args.index)?;
    manager.apply_configuration(&adapter, &desired)?;

    tracing::info!(adapter = %adapter.description, mode = %desired.mode, "Configuration applied");
    writeln!(
        out,
        "{} configuration applied to {}",
        desired.mode, adapter.description
    )?;
    Ok(())
}

fn adapter_at<P: AdapterProvider>(
    manager: &AdapterManager<P>,
    index: usize,
) -> Result<AdapterDescriptor, CommandError> {
    let mut adapters = manager.list_adapters()?;
    let count = adapters.len();

    if index >= count {
        return Err(CommandError::NoSuchAdapter { index, count });
    }
    Ok(adapters.swap_remove(index))
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
