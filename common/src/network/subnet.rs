//! The /24 address space around a local address.

use std::fmt;
use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::ScanError;

pub const SUBNET_PREFIX: u8 = 24;
pub const HOSTS_PER_SUBNET: usize = 254;

/// A /24 network. Always derived from an address inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    network: Ipv4Network,
}

impl Subnet {
    /// The /24 that encloses `addr`.
    pub fn enclosing(addr: Ipv4Addr) -> Self {
        let [a, b, c, _] = addr.octets();
        let base: Ipv4Addr = Ipv4Addr::new(a, b, c, 0);
        let network: Ipv4Network =
            Ipv4Network::new(base, SUBNET_PREFIX).expect("/24 is a valid IPv4 prefix");
        Self { network }
    }

    pub fn parse_base(base: &str) -> Result<Self, ScanError> {
        base.trim()
            .parse::<Ipv4Addr>()
            .map(Self::enclosing)
            .map_err(|_| ScanError::InvalidBaseAddress(base.to_string()))
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.network.contains(addr)
    }

    /// Assignable hosts `.1` to `.254`, ascending.
    pub fn hosts(&self) -> Vec<Ipv4Addr> {
        let [a, b, c, _] = self.network().octets();
        (1..=HOSTS_PER_SUBNET as u8)
            .map(|host| Ipv4Addr::new(a, b, c, host))
            .collect()
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network.network(), SUBNET_PREFIX)
    }
}

/// Every assignable address in the /24 around `base`.
///
/// Returns an empty list when `base` is not a dotted quad.
pub fn generate_address_space(base: &str) -> Vec<Ipv4Addr> {
    match Subnet::parse_base(base) {
        Ok(subnet) => subnet.hosts(),
        Err(_) => Vec::new(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
