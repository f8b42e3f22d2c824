//! Windows adapter provider.
//!
//! Adapters are read with `GetAdaptersAddresses`; changes go through
//! `netsh interface ipv4`, whose exit code is the status code.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use windows::Win32::Foundation::WIN32_ERROR;
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_INCLUDE_GATEWAYS, GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_MULTICAST,
    GET_ADAPTERS_ADDRESSES_FLAGS, GetAdaptersAddresses, IF_TYPE_SOFTWARE_LOOPBACK,
    IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::Networking::WinSock::{
    AF_INET, AF_INET6, AF_UNSPEC, SOCKADDR_IN, SOCKADDR_IN6, SOCKET_ADDRESS,
};

use super::netsh;
use crate::network::{AdapterProvider, AdapterRecord, ProviderError, StatusCode};

/// DHCP is enabled on the adapter.
/// Value from Windows SDK `iptypes.h` - not exported by the `windows` crate.
const IP_ADAPTER_DHCP_ENABLED: u32 = 0x0004;

/// IPv4 is enabled on the adapter.
/// Value from Windows SDK `iptypes.h` - not exported by the `windows` crate.
const IP_ADAPTER_IPV4_ENABLED: u32 = 0x0080;

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`AdapterProvider`].
///
/// # Example
///
/// ```no_run
/// use ipchanger::network::{AdapterProvider, platform::WindowsProvider};
///
/// let provider = WindowsProvider::new();
/// for adapter in provider.enumerate_ip_enabled().expect("Failed to list adapters") {
///     println!("{}: {:?}", adapter.description, adapter.addresses);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsProvider {
    _private: (),
}

impl WindowsProvider {
    /// Creates a new Windows adapter provider.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterProvider for WindowsProvider {
    fn enumerate_ip_enabled(&self) -> Result<Vec<AdapterRecord>, ProviderError> {
        fetch_records()
    }

    fn enable_automatic_addressing(
        &self,
        adapter: &AdapterRecord,
    ) -> Result<StatusCode, ProviderError> {
        netsh::run(&netsh::automatic_addressing(&adapter.interface))
    }

    fn clear_dns_search_order(
        &self,
        adapter: &AdapterRecord,
    ) -> Result<StatusCode, ProviderError> {
        netsh::run(&netsh::clear_dns(&adapter.interface))
    }

    fn enable_static_addressing(
        &self,
        adapter: &AdapterRecord,
        address: &str,
        subnet_mask: &str,
    ) -> Result<StatusCode, ProviderError> {
        netsh::run(&netsh::static_addressing(
            &adapter.interface,
            address,
            subnet_mask,
        ))
    }

    fn set_default_gateway(
        &self,
        adapter: &AdapterRecord,
        gateway: &str,
    ) -> Result<StatusCode, ProviderError> {
        // Fails when no default route exists yet; only the add decides.
        let _ = netsh::run(&netsh::delete_default_route(&adapter.interface))?;
        netsh::run(&netsh::add_default_route(&adapter.interface, gateway))
    }

    fn set_dns_search_order(
        &self,
        adapter: &AdapterRecord,
        servers: &[String],
    ) -> Result<StatusCode, ProviderError> {
        netsh::run_all(&netsh::dns_search_order(&adapter.interface, servers))
    }
}

/// Reads every IP-enabled adapter, keeping the API's order.
fn fetch_records() -> Result<Vec<AdapterRecord>, ProviderError> {
    let raw_adapters = get_adapter_addresses()?;

    let mut records = Vec::new();
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for IP_ADAPTER_ADDRESSES_LH.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = raw_adapters.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

    // SAFETY: The linked list is valid as long as `raw_adapters` is alive.
    while !current.is_null() {
        let adapter = unsafe { &*current };

        if is_ip_enabled(adapter) {
            if let Some(record) = parse_adapter(adapter) {
                records.push(record);
            }
        }

        current = adapter.Next;
    }

    tracing::debug!("GetAdaptersAddresses reported {} IP-enabled adapter(s)", records.len());
    Ok(records)
}

/// Calls `GetAdaptersAddresses`, retrying once with the size the API asks for.
fn get_adapter_addresses() -> Result<Vec<u8>, ProviderError> {
    use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR};

    let flags = GAA_FLAG_SKIP_ANYCAST | GAA_FLAG_SKIP_MULTICAST | GAA_FLAG_INCLUDE_GATEWAYS;
    let family = u32::from(AF_UNSPEC.0);

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    let mut result = call_api(family, flags, &mut buffer, &mut size);
    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(size as usize, 0);
        result = call_api(family, flags, &mut buffer, &mut size);
    }

    if result != NO_ERROR.0 {
        return Err(api_error(result));
    }

    Ok(buffer)
}

/// Converts a failing `GetAdaptersAddresses` result into a [`ProviderError`].
fn api_error(code: u32) -> ProviderError {
    use windows::Win32::Foundation::ERROR_ACCESS_DENIED;

    if code == ERROR_ACCESS_DENIED.0 {
        return ProviderError::PermissionDenied {
            context: "reading adapter addresses".to_string(),
        };
    }
    windows::core::Error::from(WIN32_ERROR(code)).into()
}

#[cfg(not(tarpaulin_include))]
fn call_api(
    family: u32,
    flags: GET_ADAPTERS_ADDRESSES_FLAGS,
    buffer: &mut [u8],
    size: &mut u32,
) -> u32 {
    // SAFETY: `buffer` is at least `size` bytes long; the API writes adapter
    // data into it and updates `size` with the required length.
    unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            std::ptr::from_mut(size),
        )
    }
}

fn is_ip_enabled(adapter: &IP_ADAPTER_ADDRESSES_LH) -> bool {
    // SAFETY: `Flags` shares storage with a bitfield struct of the same size.
    let flags = unsafe { adapter.Anonymous2.Flags };
    adapter.IfType != IF_TYPE_SOFTWARE_LOOPBACK && flags & IP_ADAPTER_IPV4_ENABLED != 0
}

/// Converts one adapter entry into an [`AdapterRecord`].
///
/// Returns `None` if the adapter names cannot be read.
fn parse_adapter(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<AdapterRecord> {
    let description = unsafe { adapter.Description.to_string().ok()? };
    let interface = unsafe { adapter.FriendlyName.to_string().ok()? };
    // SAFETY: see `is_ip_enabled`.
    let flags = unsafe { adapter.Anonymous2.Flags };

    let (addresses, subnet_masks) = collect_unicast(adapter);

    Some(AdapterRecord {
        description,
        interface,
        dhcp_enabled: flags & IP_ADAPTER_DHCP_ENABLED != 0,
        addresses,
        subnet_masks,
        gateways: collect_gateways(adapter),
        dns_servers: collect_dns_servers(adapter),
    })
}

/// Collects unicast addresses and their masks, IPv4 entries first.
fn collect_unicast(adapter: &IP_ADAPTER_ADDRESSES_LH) -> (Vec<String>, Vec<String>) {
    let mut v4 = Vec::new();
    let mut v6 = Vec::new();

    let mut unicast = adapter.FirstUnicastAddress;
    // SAFETY: Each entry is valid as long as the parent adapter buffer is alive.
    while !unicast.is_null() {
        let entry = unsafe { &*unicast };
        let prefix = entry.OnLinkPrefixLength;

        match socket_address_to_ip(&entry.Address) {
            Some(IpAddr::V4(addr)) => v4.push((addr.to_string(), ipv4_mask(prefix).to_string())),
            Some(IpAddr::V6(addr)) => v6.push((addr.to_string(), prefix.to_string())),
            None => {}
        }

        unicast = entry.Next;
    }

    v4.into_iter().chain(v6).unzip()
}

fn collect_gateways(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Vec<String> {
    let mut gateways = Vec::new();
    let mut gateway = adapter.FirstGatewayAddress;
    // SAFETY: Same lifetime guarantee as the unicast list.
    while !gateway.is_null() {
        let entry = unsafe { &*gateway };
        if let Some(addr) = socket_address_to_ip(&entry.Address) {
            gateways.push(addr.to_string());
        }
        gateway = entry.Next;
    }
    gateways
}

fn collect_dns_servers(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Vec<String> {
    let mut servers = Vec::new();
    let mut server = adapter.FirstDnsServerAddress;
    // SAFETY: Same lifetime guarantee as the unicast list.
    while !server.is_null() {
        let entry = unsafe { &*server };
        if let Some(addr) = socket_address_to_ip(&entry.Address) {
            servers.push(addr.to_string());
        }
        server = entry.Next;
    }
    servers
}

/// Reads an IPv4 or IPv6 address out of a `SOCKET_ADDRESS`.
///
/// # Safety Note
///
/// The pointer casts to `SOCKADDR_IN` and `SOCKADDR_IN6` are allowed despite alignment
/// concerns because Windows guarantees proper alignment of these structures when returned
/// from the networking APIs.
#[allow(clippy::cast_ptr_alignment)]
fn socket_address_to_ip(address: &SOCKET_ADDRESS) -> Option<IpAddr> {
    // SAFETY: lpSockaddr is either null or points into the adapter buffer.
    let sockaddr = unsafe { address.lpSockaddr.as_ref()? };

    match sockaddr.sa_family {
        f if f == AF_INET => {
            // SAFETY: We verified the family is AF_INET, so this is a valid cast.
            let sockaddr_in = unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN>()) };
            // SAFETY: sin_addr contains the IPv4 address bytes in network order.
            let octets = unsafe { sockaddr_in.sin_addr.S_un.S_un_b };
            Some(IpAddr::V4(Ipv4Addr::new(
                octets.s_b1,
                octets.s_b2,
                octets.s_b3,
                octets.s_b4,
            )))
        }
        f if f == AF_INET6 => {
            // SAFETY: We verified the family is AF_INET6, so this is a valid cast.
            let sockaddr_in6 = unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN6>()) };
            // SAFETY: We verified this is an IPv6 address, so the union field is valid.
            let octets = unsafe { sockaddr_in6.sin6_addr.u.Byte };
            Some(IpAddr::V6(Ipv6Addr::from(octets)))
        }
        _ => None,
    }
}

/// Dotted-quad mask for an IPv4 prefix length (clamped to 32).
fn ipv4_mask(prefix: u8) -> Ipv4Addr {
    let prefix = u32::from(prefix.min(32));
    let bits = u32::MAX.checked_shl(32 - prefix).unwrap_or(0);
    Ipv4Addr::from(bits)
}
