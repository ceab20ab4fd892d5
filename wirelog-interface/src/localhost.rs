//! Local address resolution for log attribution.

use std::io;
use std::net::{Ipv4Addr, UdpSocket};

/// Resolves the address of the host emitting the requests being logged.
///
/// Adapters call this once per log entry to attribute outbound traffic to
/// the local endpoint. Resolution may fail; adapters treat that failure as
/// fatal.
pub trait Localhost: Send + Sync {
    /// Returns the local address as a printable string.
    fn address(&self) -> io::Result<String>;
}

impl<F> Localhost for F
where
    F: Fn() -> io::Result<String> + Send + Sync,
{
    fn address(&self) -> io::Result<String> {
        self()
    }
}

/// Resolves the host's outward-facing address from the OS routing table.
///
/// Connects a UDP socket to a public address and reads the local address
/// the kernel picked for that route. No packets are sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocalhost;

impl Localhost for SystemLocalhost {
    fn address(&self) -> io::Result<String> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.connect(("1.1.1.1", 53))?;
        Ok(socket.local_addr()?.ip().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;

    use super::{Localhost, SystemLocalhost};

    #[test]
    fn system_localhost_yields_a_parsable_address() {
        // Hosts without a default route legitimately fail to resolve.
        if let Ok(address) = SystemLocalhost.address() {
            assert!(address.parse::<IpAddr>().is_ok());
        }
    }

    #[test]
    fn closures_resolve_as_localhost() {
        let fixed = || -> std::io::Result<String> { Ok("192.0.2.7".to_owned()) };
        assert_eq!(fixed.address().unwrap(), "192.0.2.7");
    }
}
