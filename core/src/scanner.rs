//! The bounded, deadline-limited liveness sweep.
//!
//! A [`Sweep`] fans one [`Prober`] call out per target address. The number of
//! probes in flight is capped by a semaphore; each task owns its permit, so a
//! slot is returned whether the probe answers, fails, or is aborted. Answers
//! travel back to the coordinator over a channel. The whole sweep runs under
//! one deadline; when it fires, outstanding tasks are aborted and whatever
//! already answered is returned.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use findpi_common::config::{Config, DEFAULT_PROBE_TIMEOUT, DEFAULT_SWEEP_DEADLINE, ProbeBackend};
use findpi_common::scanning::Prober;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, warn};

pub mod handshake;
pub mod icmp;
pub mod resolver;

/// Receives `(completed, total)` after every finished probe.
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

pub struct Sweep {
    prober: Arc<dyn Prober>,
    concurrency: usize,
    probe_timeout: Duration,
    deadline: Duration,
    on_progress: Option<ProgressCallback>,
}

impl Sweep {
    /// A zero `concurrency` is clamped to one.
    pub fn new(prober: Arc<dyn Prober>, concurrency: usize) -> Self {
        Self {
            prober,
            concurrency: concurrency.max(1),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            deadline: DEFAULT_SWEEP_DEADLINE,
            on_progress: None,
        }
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

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Probes every target and returns the ones that answered, in completion
    /// order. Never returns an address that is not in `targets`.
    pub async fn run(&self, targets: &[Ipv4Addr]) -> Vec<Ipv4Addr> {
        if targets.is_empty() {
            return Vec::new();
        }

        let total: usize = targets.len();
        let semaphore: Arc<Semaphore> = Arc::new(Semaphore::new(self.concurrency));
        let completed: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
        let (tx, mut rx) = mpsc::unbounded_channel::<Ipv4Addr>();
        let mut tasks: JoinSet<()> = JoinSet::new();

        debug!(
            "Sweeping {total} addresses, {} in flight, {:?} per probe, {:?} overall",
            self.concurrency, self.probe_timeout, self.deadline
        );

        let dispatch = async {
            for &addr in targets {
                let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
                    break;
                };

                let prober: Arc<dyn Prober> = Arc::clone(&self.prober);
                let completed: Arc<AtomicUsize> = Arc::clone(&completed);
                let on_progress: Option<ProgressCallback> = self.on_progress.clone();
                let tx = tx.clone();
                let probe_timeout: Duration = self.probe_timeout;

                tasks.spawn(async move {
                    let _permit = permit;
                    let alive: bool = tokio::time::timeout(probe_timeout, prober.probe(addr, probe_timeout))
                        .await
                        .unwrap_or(false);

                    if alive {
                        let _ = tx.send(addr);
                    }

                    let done: usize = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(callback) = on_progress {
                        callback(done, total);
                    }
                });
            }

            while tasks.join_next().await.is_some() {}
        };

        if tokio::time::timeout(self.deadline, dispatch).await.is_err() {
            warn!(
                "Sweep deadline of {:?} reached after {}/{} probes, cancelling the rest",
                self.deadline,
                completed.load(Ordering::Relaxed),
                total
            );
        }

        tasks.shutdown().await;
        drop(tx);

        let mut responsive: Vec<Ipv4Addr> = Vec::new();
        while let Some(addr) = rx.recv().await {
            responsive.push(addr);
        }

        debug!("{} of {total} addresses responded", responsive.len());
        responsive
    }
}

/// Builds the probe backend selected in `cfg`.
pub fn prober_for(cfg: &Config) -> anyhow::Result<Arc<dyn Prober>> {
    let prober: Arc<dyn Prober> = match cfg.backend {
        ProbeBackend::Icmp => Arc::new(icmp::IcmpProber::new(cfg.ping_count)?),
        ProbeBackend::Tcp => Arc::new(handshake::HandshakeProber::default()),
    };
    Ok(prober)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
