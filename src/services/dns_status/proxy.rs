//! systemd-resolved Manager interface.

use zbus::proxy;

/// Global DNS configuration state of systemd-resolved.
///
/// Subset of the Manager interface needed for status monitoring.
#[proxy(
    default_service = "org.freedesktop.resolve1",
    interface = "org.freedesktop.resolve1.Manager",
    default_path = "/org/freedesktop/resolve1"
)]
pub trait ResolveManager {
    /// Global DNS-over-TLS mode ("yes", "opportunistic" or "no").
    #[zbus(property, name = "DNSOverTLS")]
    fn dns_over_tls(&self) -> zbus::Result<String>;

    /// Server used for the most recent lookup, with port and server name.
    #[zbus(property, name = "CurrentDNSServerEx")]
    fn current_dns_server_ex(&self) -> zbus::Result<(i32, i32, Vec<u8>, u16, String)>;

    /// All configured servers, with ports and server names.
    #[zbus(property, name = "DNSEx")]
    fn dns_ex(&self) -> zbus::Result<Vec<(i32, i32, Vec<u8>, u16, String)>>;
}
