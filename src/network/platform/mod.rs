//! Platform-specific [`AdapterProvider`] implementations.
//!
//! # Platform Support
//!
//! - **Windows**: `GetAdaptersAddresses` via the `windows` crate for reading,
//!   `netsh interface ipv4` for changes.
//! - **Other platforms**: [`UnsupportedProvider`], which reports every
//!   request as unsupported.
//!
//! [`AdapterProvider`]: crate::network::AdapterProvider

mod netsh;
#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
pub use unsupported::UnsupportedProvider;
#[cfg(windows)]
pub use windows::WindowsProvider;

// Re-export the platform's provider as PlatformProvider for convenience
#[cfg(not(windows))]
pub use unsupported::UnsupportedProvider as PlatformProvider;
#[cfg(windows)]
pub use windows::WindowsProvider as PlatformProvider;
