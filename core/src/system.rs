use std::num::NonZeroUsize;

use findpi_common::network::interface::{LocalNetwork, local_networks};
use findpi_common::system::SystemRepository;
use sysinfo::{CpuRefreshKind, RefreshKind, System, SystemExt};

/// Soft `RLIMIT_NOFILE` requested at startup. Each in-flight probe holds a
/// socket, so the default 256 on macOS is far too low.
pub const FD_LIMIT_TARGET: u64 = 8192;

pub struct SystemRepo;

impl SystemRepository for SystemRepo {
    fn local_networks(&self) -> Vec<LocalNetwork> {
        local_networks()
    }

    fn cpu_cores(&self) -> usize {
        let sys: System =
            System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
        match sys.cpus().len() {
            0 => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            n => n,
        }
    }

    #[cfg(unix)]
    fn raise_fd_limit(&self, target: u64) -> anyhow::Result<u64> {
        use anyhow::Context;
        use rlimit::Resource;

        let (soft, hard) = rlimit::getrlimit(Resource::NOFILE).context("reading RLIMIT_NOFILE")?;
        let wanted: u64 = target.min(hard);
        if soft >= wanted {
            return Ok(soft);
        }

        rlimit::setrlimit(Resource::NOFILE, wanted, hard)
            .with_context(|| format!("raising RLIMIT_NOFILE from {soft} to {wanted}"))?;
        Ok(wanted)
    }

    #[cfg(not(unix))]
    fn raise_fd_limit(&self, target: u64) -> anyhow::Result<u64> {
        Ok(target)
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
