pub mod discover;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use findpi_common::config::{
    Config, DEFAULT_PING_COUNT, DEFAULT_PROBE_TIMEOUT, DEFAULT_SWEEP_DEADLINE, ProbeBackend,
};

#[derive(Parser, Debug)]
#[command(name = "findpi", version)]
#[command(about = "Finds the devices on your local network, Raspberry Pis first.")]
pub struct CommandLine {
    /// Index of the network to scan (skips the prompt)
    #[arg(short, long)]
    pub network: Option<usize>,

    /// Liveness probe: icmp or tcp
    #[arg(short, long, default_value_t = ProbeBackend::Icmp)]
    pub backend: ProbeBackend,

    /// Probes in flight at once [default: CPU cores × 32]
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Per-probe timeout in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_PROBE_TIMEOUT.as_millis() as u64)]
    pub timeout: u64,

    /// Overall sweep deadline in seconds
    #[arg(long, default_value_t = DEFAULT_SWEEP_DEADLINE.as_secs())]
    pub deadline: u64,

    /// Echo requests per address (icmp only)
    #[arg(long, default_value_t = DEFAULT_PING_COUNT)]
    pub ping_count: u16,

    /// Skip reverse DNS lookups
    #[arg(long)]
    pub no_dns: bool,

    /// Directory for result files [default: home directory]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Extra OUI table in Wireshark manuf format
    #[arg(long)]
    pub oui_file: Option<PathBuf>,

    /// Don't fall back to the bundled IEEE registry
    #[arg(long)]
    pub no_registry: bool,

    /// Less output (-q hides banners, -qq also hides the device list)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            network: self.network,
            backend: self.backend,
            concurrency: self.concurrency,
            probe_timeout: Duration::from_millis(self.timeout),
            sweep_deadline: Duration::from_secs(self.deadline),
            ping_count: self.ping_count,
            no_dns: self.no_dns,
            no_registry: self.no_registry,
            oui_file: self.oui_file.clone(),
            output_dir: self.output_dir.clone(),
            quiet: self.quiet,
        }
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
