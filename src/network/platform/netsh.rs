//! Change requests issued through `netsh interface ipv4`.
//!
//! Argument lists are built by pure functions so they can be checked on any
//! platform; `run` executes them and reports the exit code as the status.

#![cfg_attr(not(windows), allow(dead_code))]

#[cfg(windows)]
use crate::network::{ProviderError, STATUS_SUCCESS, StatusCode};

#[cfg(windows)]
const PROGRAM: &str = "netsh";

/// Prefix matching every IPv4 destination, used for the default route.
const DEFAULT_ROUTE: &str = "0.0.0.0/0";

fn base(verb: &str, object: &str) -> Vec<String> {
    ["interface", "ipv4", verb, object]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn name_arg(interface: &str) -> String {
    format!("name={interface}")
}

/// `set address ... source=dhcp`
pub fn automatic_addressing(interface: &str) -> Vec<String> {
    let mut args = base("set", "address");
    args.push(name_arg(interface));
    args.push("source=dhcp".to_string());
    args
}

/// `set dnsservers ... source=dhcp`
pub fn clear_dns(interface: &str) -> Vec<String> {
    let mut args = base("set", "dnsservers");
    args.push(name_arg(interface));
    args.push("source=dhcp".to_string());
    args
}

/// `set address ... source=static address=<a> mask=<m>`
pub fn static_addressing(interface: &str, address: &str, subnet_mask: &str) -> Vec<String> {
    let mut args = base("set", "address");
    args.push(name_arg(interface));
    args.push("source=static".to_string());
    args.push(format!("address={address}"));
    args.push(format!("mask={subnet_mask}"));
    args
}

/// `delete route 0.0.0.0/0 <if>`
pub fn delete_default_route(interface: &str) -> Vec<String> {
    let mut args = base("delete", "route");
    args.push(DEFAULT_ROUTE.to_string());
    args.push(interface.to_string());
    args
}

/// `add route 0.0.0.0/0 <if> <gateway>`
pub fn add_default_route(interface: &str, gateway: &str) -> Vec<String> {
    let mut args = base("add", "route");
    args.push(DEFAULT_ROUTE.to_string());
    args.push(interface.to_string());
    args.push(gateway.to_string());
    args
}

/// Invocations that replace the DNS search order, in execution order.
///
/// The first server replaces the list; the rest are appended by position.
pub fn dns_search_order(interface: &str, servers: &[String]) -> Vec<Vec<String>> {
    let Some((first, rest)) = servers.split_first() else {
        let mut args = base("set", "dnsservers");
        args.push(name_arg(interface));
        args.push("source=static".to_string());
        args.push("address=none".to_string());
        return vec![args];
    };

    let mut primary = base("set", "dnsservers");
    primary.push(name_arg(interface));
    primary.push("source=static".to_string());
    primary.push(format!("address={first}"));
    primary.push("register=primary".to_string());
    primary.push("validate=no".to_string());

    let mut invocations = vec![primary];
    for (offset, server) in rest.iter().enumerate() {
        let mut args = base("add", "dnsserver");
        args.push(name_arg(interface));
        args.push(format!("address={server}"));
        args.push(format!("index={}", offset + 2));
        args.push("validate=no".to_string());
        invocations.push(args);
    }
    invocations
}

/// Runs `netsh` with the given arguments and returns its exit code.
///
/// # Errors
///
/// Returns [`ProviderError::Spawn`] if `netsh` cannot be started.
#[cfg(windows)]
pub fn run(args: &[String]) -> Result<StatusCode, ProviderError> {
    tracing::debug!("{PROGRAM} {}", args.join(" "));

    let output = std::process::Command::new(PROGRAM)
        .args(args)
        .output()
        .map_err(|source| ProviderError::Spawn {
            program: PROGRAM.to_string(),
            source,
        })?;

    let status = output.status.code().map_or(StatusCode::MAX, |code| {
        StatusCode::from_ne_bytes(code.to_ne_bytes())
    });

    if status != STATUS_SUCCESS {
        let stdout = String::from_utf8_lossy(&output.stdout);
        tracing::debug!(
            status,
            stdout = %stdout.trim(),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "{PROGRAM} reported failure"
        );

        if needs_elevation(&stdout) {
            return Err(ProviderError::PermissionDenied {
                context: format!("'{PROGRAM} {}' must be run as administrator", args.join(" ")),
            });
        }
    }

    Ok(status)
}

/// Whether `netsh` refused a change because the process is not elevated.
pub fn needs_elevation(output: &str) -> bool {
    output.to_ascii_lowercase().contains("requires elevation")
}

/// Runs each invocation in order, stopping at the first non-zero status.
///
/// # Errors
///
/// Returns [`ProviderError::Spawn`] if `netsh` cannot be started.
#[cfg(windows)]
pub fn run_all(invocations: &[Vec<String>]) -> Result<StatusCode, ProviderError> {
    for args in invocations {
        let status = run(args)?;
        if status != STATUS_SUCCESS {
            return Ok(status);
        }
    }
    Ok(STATUS_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(args: &[String]) -> String {
        args.join(" ")
    }

    #[test]
    fn automatic_addressing_uses_dhcp_source() {
        assert_eq!(
            joined(&automatic_addressing("Ethernet")),
            "interface ipv4 set address name=Ethernet source=dhcp"
        );
    }

    #[test]
    fn clear_dns_uses_dhcp_source() {
        assert_eq!(
            joined(&clear_dns("Wi-Fi")),
            "interface ipv4 set dnsservers name=Wi-Fi source=dhcp"
        );
    }

    #[test]
    fn static_addressing_passes_values_through() {
        assert_eq!(
            joined(&static_addressing("Ethernet", "192.168.1.50", "255.255.255.0")),
            "interface ipv4 set address name=Ethernet source=static address=192.168.1.50 mask=255.255.255.0"
        );
    }

    #[test]
    fn interface_with_spaces_stays_one_argument() {
        let args = automatic_addressing("Ethernet 2");
        assert!(args.contains(&"name=Ethernet 2".to_string()));
    }

    #[test]
    fn default_route_commands() {
        assert_eq!(
            joined(&delete_default_route("Ethernet")),
            "interface ipv4 delete route 0.0.0.0/0 Ethernet"
        );
        assert_eq!(
            joined(&add_default_route("Ethernet", "192.168.1.1")),
            "interface ipv4 add route 0.0.0.0/0 Ethernet 192.168.1.1"
        );
    }

    mod elevation {
        use super::*;

        #[test]
        fn detects_elevation_message() {
            let output = "The requested operation requires elevation (Run as administrator).\r\n";
            assert!(needs_elevation(output));
        }

        #[test]
        fn other_failures_are_plain_status() {
            assert!(!needs_elevation("The filename, directory name, or volume label syntax is incorrect."));
            assert!(!needs_elevation(""));
        }
    }

    mod dns_order {
        use super::*;

        #[test]
        fn first_server_replaces_list() {
            let invocations = dns_search_order("Ethernet", &["8.8.8.8".to_string()]);

            assert_eq!(invocations.len(), 1);
            assert_eq!(
                joined(&invocations[0]),
                "interface ipv4 set dnsservers name=Ethernet source=static address=8.8.8.8 register=primary validate=no"
            );
        }

        #[test]
        fn further_servers_are_added_by_position() {
            let servers = vec![
                "8.8.8.8".to_string(),
                "8.8.4.4".to_string(),
                "1.1.1.1".to_string(),
            ];
            let invocations = dns_search_order("Ethernet", &servers);

            assert_eq!(invocations.len(), 3);
            assert_eq!(
                joined(&invocations[1]),
                "interface ipv4 add dnsserver name=Ethernet address=8.8.4.4 index=2 validate=no"
            );
            assert!(invocations[2].contains(&"index=3".to_string()));
        }

        #[test]
        fn empty_list_sets_none() {
            let invocations = dns_search_order("Ethernet", &[]);

            assert_eq!(invocations.len(), 1);
            assert!(invocations[0].contains(&"address=none".to_string()));
        }
    }
}
