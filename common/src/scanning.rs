//! The seams the discovery pipeline is generic over.
//!
//! Each trait hides one piece of the outside world (the network, the
//! operating system's neighbor cache, the resolver) so that the pipeline can
//! be exercised against fakes.

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;

/// Checks a single address for liveness.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns `true` when `addr` answered within `timeout`.
    ///
    /// Failures of any kind (unreachable, malformed, timed out) are reported
    /// as `false`. Implementations must not retry.
    async fn probe(&self, addr: Ipv4Addr, timeout: Duration) -> bool;
}

/// Produces the raw text of the operating system's neighbor (ARP) cache.
#[async_trait]
pub trait NeighborSource: Send + Sync {
    async fn neighbor_table(&self) -> anyhow::Result<String>;
}

/// Reverse name lookup for discovered devices.
#[async_trait]
pub trait HostnameLookup: Send + Sync {
    async fn hostname(&self, addr: Ipv4Addr) -> Option<String>;
}
