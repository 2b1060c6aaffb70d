//! Local IPv4 networks the scanner can sweep.

use std::collections::HashSet;
use std::fmt;
use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network};

use crate::network::subnet::Subnet;

pub trait NetworkInterfaceExtension {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network>;
    fn is_scannable(&self) -> bool;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network> {
        self.ips
            .iter()
            .filter_map(|ip| {
                if let IpNetwork::V4(ipv4) = ip {
                    Some(*ipv4)
                } else {
                    None
                }
            })
            .collect()
    }

    fn is_scannable(&self) -> bool {
        self.is_up() && !self.is_loopback() && !self.ips.is_empty()
    }
}

/// One selectable entry in the network menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalNetwork {
    pub interface: String,
    /// This host's address on the network.
    pub address: Ipv4Addr,
    pub subnet: Subnet,
}

impl fmt::Display for LocalNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} on {})", self.subnet, self.address, self.interface)
    }
}

/// Enumerates the /24 networks reachable from this host's interfaces.
pub fn local_networks() -> Vec<LocalNetwork> {
    collect_local_networks(&datalink::interfaces())
}

/// Every non-loopback IPv4 address of every usable interface, in interface
/// order. Addresses sharing a /24 collapse into the first one seen.
pub fn collect_local_networks(interfaces: &[NetworkInterface]) -> Vec<LocalNetwork> {
    let mut seen: HashSet<Subnet> = HashSet::new();

    interfaces
        .iter()
        .filter(|intf| intf.is_scannable())
        .flat_map(|intf| {
            intf.get_ipv4_nets()
                .into_iter()
                .filter(|net| !net.ip().is_loopback() && !net.ip().is_unspecified())
                .map(move |net| LocalNetwork {
                    interface: intf.name.clone(),
                    address: net.ip(),
                    subnet: Subnet::enclosing(net.ip()),
                })
        })
        .filter(|network| seen.insert(network.subnet))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
