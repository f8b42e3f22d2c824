//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::form::FormValues;
use crate::network::AddressingMode;

/// ipchanger: switch a network adapter between DHCP and static addressing
///
/// Without a subcommand, opens the interactive window.
#[derive(Debug, Parser)]
#[command(name = "ipchanger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Write log output to this file
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for ipchanger
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "ipchanger.toml")]
        output: PathBuf,
    },

    /// List IP-enabled network adapters
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the current configuration of an adapter
    Show {
        /// Adapter index as printed by `list`
        index: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Apply a DHCP or static configuration to an adapter
    Apply(ApplyArgs),
}

/// Arguments of the `apply` subcommand.
///
/// Static fields that are not given fall back to the `[form]` defaults.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("mode").required(true).args(["dhcp", "static_ip"])))]
pub struct ApplyArgs {
    /// Adapter index as printed by `list`
    pub index: usize,

    /// Obtain address and DNS servers automatically
    #[arg(long)]
    pub dhcp: bool,

    /// Use the given static address, mask, gateway and DNS servers
    #[arg(long = "static")]
    pub static_ip: bool,

    /// Static IP address
    #[arg(long, conflicts_with = "dhcp")]
    pub address: Option<String>,

    /// Static subnet mask
    #[arg(long, conflicts_with = "dhcp")]
    pub mask: Option<String>,

    /// Default gateway
    #[arg(long, conflicts_with = "dhcp")]
    pub gateway: Option<String>,

    /// DNS servers separated by " - "
    #[arg(long, value_name = "LIST", conflicts_with = "dhcp")]
    pub dns: Option<String>,
}

impl ApplyArgs {
    /// Mode selected on the command line.
    #[must_use]
    pub const fn mode(&self) -> AddressingMode {
        if self.static_ip {
            AddressingMode::Static
        } else {
            AddressingMode::Dhcp
        }
    }

    /// Field text to apply, falling back to `defaults` per field.
    #[must_use]
    pub fn form_values(&self, defaults: &FormValues) -> FormValues {
        let pick = |cli: Option<&String>, fallback: &String| cli.unwrap_or(fallback).clone();

        FormValues {
            address: pick(self.address.as_ref(), &defaults.address),
            subnet_mask: pick(self.mask.as_ref(), &defaults.subnet_mask),
            gateway: pick(self.gateway.as_ref(), &defaults.gateway),
            dns: pick(self.dns.as_ref(), &defaults.dns),
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if the interactive window should be opened.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.command.is_none()
    }
}
