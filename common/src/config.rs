use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Probes in flight per logical core. Probes are I/O bound, so the pool is
/// sized well past the core count.
pub const PROBES_PER_CORE: usize = 32;

/// How long a single probe waits for its reply.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Upper bound for the whole sweep.
pub const DEFAULT_SWEEP_DEADLINE: Duration = Duration::from_secs(120);

/// Echo requests sent per address.
pub const DEFAULT_PING_COUNT: u16 = 1;

/// The way a single address is checked for liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeBackend {
    /// Unprivileged ICMP echo.
    #[default]
    Icmp,
    /// TCP handshake against well-known ports.
    Tcp,
}

impl FromStr for ProbeBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "icmp" | "ping" => Ok(ProbeBackend::Icmp),
            "tcp" | "handshake" => Ok(ProbeBackend::Tcp),
            other => Err(format!("unknown probe backend: {other} (expected icmp or tcp)")),
        }
    }
}

impl fmt::Display for ProbeBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeBackend::Icmp => write!(f, "icmp"),
            ProbeBackend::Tcp => write!(f, "tcp"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Index of the local network to scan. Prompts when `None`.
    pub network: Option<usize>,
    pub backend: ProbeBackend,
    /// Maximum probes in flight. Derived from the core count when `None`.
    pub concurrency: Option<usize>,
    pub probe_timeout: Duration,
    pub sweep_deadline: Duration,
    pub ping_count: u16,
    /// Disables reverse DNS lookups for discovered devices.
    pub no_dns: bool,
    /// Disables the bundled IEEE registry used when the OUI table misses.
    pub no_registry: bool,
    /// Extra OUI table in Wireshark `manuf` format.
    pub oui_file: Option<PathBuf>,
    /// Where result files go. Defaults to the home directory.
    pub output_dir: Option<PathBuf>,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: None,
            backend: ProbeBackend::default(),
            concurrency: None,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            sweep_deadline: DEFAULT_SWEEP_DEADLINE,
            ping_count: DEFAULT_PING_COUNT,
            no_dns: false,
            no_registry: false,
            oui_file: None,
            output_dir: None,
            quiet: 0,
        }
    }
}

impl Config {
    /// Concurrency budget for the sweep, never below one.
    pub fn concurrency_for(&self, cores: usize) -> usize {
        self.concurrency
            .unwrap_or_else(|| cores.max(1) * PROBES_PER_CORE)
            .max(1)
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
