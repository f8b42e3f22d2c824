//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use std::path::PathBuf;

use crate::form::FormValues;

/// Default static IP address shown in the form.
pub const ADDRESS: &str = "192.168.1.100";

/// Default subnet mask shown in the form.
pub const SUBNET_MASK: &str = "255.255.255.0";

/// Default gateway shown in the form.
pub const GATEWAY: &str = "192.168.1.1";

/// Default DNS servers shown in the form.
pub const DNS: &str = "8.8.8.8 - 8.8.4.4";

/// Directory under the platform config dir holding the config file.
pub const APP_DIR: &str = "ipchanger";

/// File name of the implicit config file.
pub const CONFIG_FILE: &str = "config.toml";

/// Default form text.
#[must_use]
pub fn form_values() -> FormValues {
    FormValues {
        address: ADDRESS.to_string(),
        subnet_mask: SUBNET_MASK.to_string(),
        gateway: GATEWAY.to_string(),
        dns: DNS.to_string(),
    }
}

/// Path of the config file loaded when `--config` is not given.
///
/// Returns `None` if the platform config directory cannot be determined.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}
