use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use async_trait::async_trait;
use findpi_common::network::device::Device;
use findpi_common::scanning::HostnameLookup;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::trace;

/// Lookups running at once. The system resolver is a blocking call.
const MAX_CONCURRENT_LOOKUPS: usize = 16;

/// Reverse lookups through the operating system resolver (hosts file, DNS,
/// mDNS where the platform wires it in).
pub struct SystemResolver;

#[async_trait]
impl HostnameLookup for SystemResolver {
    async fn hostname(&self, addr: Ipv4Addr) -> Option<String> {
        let ip: IpAddr = IpAddr::V4(addr);
        let name: String = tokio::task::spawn_blocking(move || dns_lookup::lookup_addr(&ip))
            .await
            .ok()?
            .map_err(|e| trace!("reverse lookup for {addr} failed: {e}"))
            .ok()?;
        clean_hostname(&name, addr)
    }
}

/// Strips the root dot and rejects numeric echoes of the address itself.
fn clean_hostname(name: &str, addr: Ipv4Addr) -> Option<String> {
    let name: &str = name.trim().trim_end_matches('.');
    if name.is_empty() || name.parse::<Ipv4Addr>().is_ok_and(|ip| ip == addr) {
        return None;
    }
    Some(name.to_string())
}

/// Fills in hostnames for every device. Order is preserved.
pub async fn resolve_hostnames<L>(devices: Vec<Device>, lookup: Arc<L>) -> Vec<Device>
where
    L: HostnameLookup + ?Sized + 'static,
{
    let semaphore: Arc<Semaphore> = Arc::new(Semaphore::new(MAX_CONCURRENT_LOOKUPS));
    let mut tasks: JoinSet<(usize, Option<String>)> = JoinSet::new();

    for (idx, device) in devices.iter().enumerate() {
        let lookup = Arc::clone(&lookup);
        let semaphore = Arc::clone(&semaphore);
        let ip: Ipv4Addr = device.ip;
        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await.ok();
            (idx, lookup.hostname(ip).await)
        });
    }

    let mut names: Vec<Option<String>> = vec![None; devices.len()];
    while let Some(joined) = tasks.join_next().await {
        if let Ok((idx, name)) = joined {
            names[idx] = name;
        }
    }

    devices
        .into_iter()
        .zip(names)
        .map(|(device, name)| device.with_hostname(name))
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
