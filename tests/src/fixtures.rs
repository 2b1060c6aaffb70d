use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use findpi_common::scanning::{HostnameLookup, NeighborSource, Prober};
use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network};

pub const FLAGS_LOOPBACK: u32 = 65609;
pub const FLAGS_ETHERNET: u32 = 69699;

pub fn ni(name: &str, index: u32, mac: Option<MacAddr>, ips: &[IpNetwork], flags: u32) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: "".into(),
        index,
        mac,
        ips: ips.to_vec(),
        flags,
    }
}

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
    IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
}

/// Answers for every address whose last octet is in `first..=last`.
pub struct ResponsiveRange {
    first: u8,
    last: u8,
    pub probes: AtomicUsize,
}

impl ResponsiveRange {
    pub fn new(first: u8, last: u8) -> Self {
        Self {
            first,
            last,
            probes: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Prober for ResponsiveRange {
    async fn probe(&self, addr: Ipv4Addr, _timeout: Duration) -> bool {
        self.probes.fetch_add(1, Ordering::Relaxed);
        tokio::task::yield_now().await;
        (self.first..=self.last).contains(&addr.octets()[3])
    }
}

/// Never answers before the probe timeout.
pub struct Silent;

#[async_trait]
impl Prober for Silent {
    async fn probe(&self, _addr: Ipv4Addr, timeout: Duration) -> bool {
        tokio::time::sleep(timeout * 2).await;
        true
    }
}

pub struct StaticNeighbors(pub String);

#[async_trait]
impl NeighborSource for StaticNeighbors {
    async fn neighbor_table(&self) -> anyhow::Result<String> {
        Ok(self.0.clone())
    }
}

pub struct BrokenNeighbors;

#[async_trait]
impl NeighborSource for BrokenNeighbors {
    async fn neighbor_table(&self) -> anyhow::Result<String> {
        anyhow::bail!("arp: command not found")
    }
}

pub struct StaticNames(pub HashMap<Ipv4Addr, String>);

#[async_trait]
impl HostnameLookup for StaticNames {
    async fn hostname(&self, addr: Ipv4Addr) -> Option<String> {
        self.0.get(&addr).cloned()
    }
}
