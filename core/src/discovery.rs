//! # Network Discovery Service
//!
//! Implements the "scan one /24" use case.
//!
//! The service owns nothing but its collaborators. Each stage of a scan is
//! delegated to one of them and the results flow forward into a single
//! [`ScanResult`].

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use findpi_common::config::{DEFAULT_PROBE_TIMEOUT, DEFAULT_SWEEP_DEADLINE};
use findpi_common::error::ScanError;
use findpi_common::network::device::Device;
use findpi_common::network::subnet::Subnet;
use findpi_common::report::{ScanResult, Statistics};
use findpi_common::scanning::{HostnameLookup, NeighborSource, Prober};
use findpi_common::vendors::VendorRepository;
use tracing::{debug, info, warn};

use crate::neighbor::reconcile;
use crate::scanner::resolver::resolve_hostnames;
use crate::scanner::{ProgressCallback, Sweep};
use crate::statistics::aggregate;

/// Application Service for Network Discovery.
///
/// Orchestrates a scan by:
/// 1. sweeping the subnet with the injected [`Prober`].
/// 2. reading the [`NeighborSource`] and keeping the responsive rows.
/// 3. classifying MACs through the [`VendorRepository`].
/// 4. optionally filling in hostnames.
pub struct DiscoveryService {
    prober: Arc<dyn Prober>,
    neighbors: Box<dyn NeighborSource>,
    vendors: Arc<dyn VendorRepository>,
    resolver: Option<Arc<dyn HostnameLookup>>,
    concurrency: usize,
    probe_timeout: Duration,
    deadline: Duration,
    on_progress: Option<ProgressCallback>,
}

impl DiscoveryService {
    pub fn new(
        prober: Arc<dyn Prober>,
        neighbors: Box<dyn NeighborSource>,
        vendors: Arc<dyn VendorRepository>,
    ) -> Self {
        Self {
            prober,
            neighbors,
            vendors,
            resolver: None,
            concurrency: 1,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            deadline: DEFAULT_SWEEP_DEADLINE,
            on_progress: None,
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn HostnameLookup>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Parses `base` as any address inside the /24 to scan, then scans it.
    pub async fn scan_network(&self, base: &str) -> Result<ScanResult, ScanError> {
        let subnet: Subnet = Subnet::parse_base(base)?;
        Ok(self.perform_discovery(subnet).await)
    }

    /// Executes the full pipeline against `subnet`.
    ///
    /// Never fails: an unreadable neighbor table is logged and treated as
    /// empty, so the result simply holds zero devices.
    pub async fn perform_discovery(&self, subnet: Subnet) -> ScanResult {
        let started: Instant = Instant::now();

        let mut sweep: Sweep = Sweep::new(Arc::clone(&self.prober), self.concurrency)
            .with_probe_timeout(self.probe_timeout)
            .with_deadline(self.deadline);
        if let Some(callback) = &self.on_progress {
            sweep = sweep.with_progress(Arc::clone(callback));
        }

        let targets: Vec<Ipv4Addr> = subnet.hosts();
        let responsive: HashSet<Ipv4Addr> = sweep.run(&targets).await.into_iter().collect();
        info!("{} of {} hosts responded on {subnet}", responsive.len(), targets.len());

        let table: String = match self.neighbors.neighbor_table().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read the neighbor table: {e:#}");
                String::new()
            }
        };

        let mut devices: Vec<Device> = reconcile(&table, &responsive, self.vendors.as_ref());

        if let Some(resolver) = &self.resolver {
            debug!("Resolving hostnames for {} devices", devices.len());
            devices = resolve_hostnames(devices, Arc::clone(resolver)).await;
        }

        let statistics: Statistics = aggregate(&devices);
        ScanResult::new(subnet, started.elapsed(), devices, statistics)
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
