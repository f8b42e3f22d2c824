//! ipchanger: switch a network adapter between DHCP and static addressing.
//!
//! A library for listing IP-enabled network adapters, reading their
//! current IPv4 configuration, and applying a DHCP or static configuration
//! through the operating system's network-configuration interface.

pub mod commands;
pub mod config;
pub mod form;
pub mod manager;
pub mod network;
pub mod ui;
