//! Reading the operating system's neighbor (ARP) cache.
//!
//! The cache is queried through `arp -a`, whose output is one line per
//! neighbor:
//!
//! ```text
//! ? (192.168.1.1) at aa:bb:cc:dd:ee:ff on en0 ifscope [ethernet]
//! router.lan (192.168.1.1) at aa:bb:cc:dd:ee:ff [ether] on wlan0
//! ? (192.168.1.7) at (incomplete) on en0 ifscope [ethernet]
//! ```
//!
//! Only lines with a resolved link-layer address and the full
//! `(address) at <mac> ... on <interface>` shape are used. Anything else is
//! skipped line by line, so one odd row never costs the whole table.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

use anyhow::{Context, ensure};
use async_trait::async_trait;
use findpi_common::network::device::Device;
use findpi_common::network::mac::MacAddress;
use findpi_common::scanning::NeighborSource;
use findpi_common::vendors::VendorRepository;
use regex::Regex;
use tokio::process::Command;
use tracing::{debug, trace};

static NEIGHBOR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^\s*(?:\S+\s+)?                             # optional hostname or '?'
        \((?P<ip>\d{1,3}(?:\.\d{1,3}){3})\)\s+      # (a.b.c.d)
        at\s+
        (?P<mac>[0-9A-Fa-f]{1,4}(?:[:.\-][0-9A-Fa-f]{1,4}){2,5})
        (?:\s+\[[^\]]*\])?                          # linux '[ether]'
        \s+on\s+(?P<iface>\S+)
        ",
    )
    .expect("neighbor line pattern compiles")
});

/// One resolved row of the neighbor cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborEntry {
    pub ip: Ipv4Addr,
    pub mac: MacAddress,
    pub interface: String,
}

/// Parses a single `arp -a` line. `None` for incomplete or malformed rows.
pub fn parse_line(line: &str) -> Option<NeighborEntry> {
    if line.contains("incomplete") {
        return None;
    }

    let caps = NEIGHBOR_LINE.captures(line)?;
    let ip: Ipv4Addr = caps["ip"].parse().ok()?;
    let mac: MacAddress = caps["mac"].parse().ok()?;

    Some(NeighborEntry {
        ip,
        mac,
        interface: caps["iface"].to_string(),
    })
}

/// Every well-formed row in `text`, in order of appearance.
pub fn parse_table(text: &str) -> Vec<NeighborEntry> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let entry: Option<NeighborEntry> = parse_line(line);
            if entry.is_none() {
                trace!("skipping neighbor line: {line}");
            }
            entry
        })
        .collect()
}

/// Intersects the neighbor cache with the addresses that answered a probe.
///
/// Cache rows for addresses this scan never heard from are ignored, and
/// responsive addresses without a row produce nothing. When an address shows
/// up on several interfaces the first row wins. Devices come back sorted by
/// address.
pub fn reconcile(
    text: &str,
    responsive: &HashSet<Ipv4Addr>,
    vendors: &dyn VendorRepository,
) -> Vec<Device> {
    let mut seen: HashSet<Ipv4Addr> = HashSet::new();

    let mut devices: Vec<Device> = parse_table(text)
        .into_iter()
        .filter(|entry| responsive.contains(&entry.ip))
        .filter(|entry| seen.insert(entry.ip))
        .map(|entry| {
            let classification = vendors.classify(&entry.mac.to_string());
            Device::new(entry.ip, entry.mac, classification)
        })
        .collect();

    devices.sort_by_key(|device| device.ip);

    debug!(
        "{} of {} responsive addresses have a neighbor entry",
        devices.len(),
        responsive.len()
    );
    devices
}

/// The `arp -a` command.
pub struct ArpCommand {
    program: String,
    args: Vec<String>,
}

impl Default for ArpCommand {
    fn default() -> Self {
        Self {
            program: "arp".to_string(),
            args: vec!["-a".to_string()],
        }
    }
}

#[async_trait]
impl NeighborSource for ArpCommand {
    async fn neighbor_table(&self) -> anyhow::Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .await
            .with_context(|| format!("failed to run '{}'", self.program))?;

        ensure!(
            output.status.success(),
            "'{}' exited with {}: {}",
            self.program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendors::{OuiClassifier, OuiTable};

    const MACOS: &str = "\
? (192.168.1.1) at 0:1a:2b:3c:4d:5e on en0 ifscope [ethernet]
? (192.168.1.7) at (incomplete) on en0 ifscope [ethernet]
raspberrypi.lan (192.168.1.20) at DC:A6:32:AA:BB:CC on en0 ifscope [ethernet]
? (224.0.0.251) at 1:0:5e:0:0:fb on en0 ifscope permanent [ethernet]
";

    const LINUX: &str = "\
_gateway (10.0.0.1) at 00:1a:2b:3c:4d:5e [ether] on wlan0
? (10.0.0.5) at <incomplete> on wlan0
nas (10.0.0.9) at b8-27-eb-01-02-03 [ether] on wlan0
";

    fn classifier() -> OuiClassifier {
        OuiClassifier::new(OuiTable::builtin())
    }

    fn set(addrs: &[[u8; 4]]) -> HashSet<Ipv4Addr> {
        addrs.iter().map(|&o| Ipv4Addr::from(o)).collect()
    }

    #[test]
    fn parses_macos_rows() {
        let entries: Vec<NeighborEntry> = parse_table(MACOS);
        let ips: Vec<Ipv4Addr> = entries.iter().map(|e| e.ip).collect();

        assert_eq!(
            ips,
            vec![
                Ipv4Addr::new(192, 168, 1, 1),
                Ipv4Addr::new(192, 168, 1, 20),
                Ipv4Addr::new(224, 0, 0, 251),
            ]
        );
        assert_eq!(entries[0].mac.to_string(), "00:1a:2b:3c:4d:5e");
        assert_eq!(entries[0].interface, "en0");
    }

    #[test]
    fn parses_linux_rows() {
        let entries: Vec<NeighborEntry> = parse_table(LINUX);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].ip, Ipv4Addr::new(10, 0, 0, 9));
        assert_eq!(entries[1].mac.to_string(), "b8:27:eb:01:02:03");
        assert_eq!(entries[1].interface, "wlan0");
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in [
            "",
            "garbage",
            "? 192.168.1.1 at aa:bb:cc:dd:ee:ff on en0",
            "? (192.168.1.1) aa:bb:cc:dd:ee:ff on en0",
            "? (192.168.1.1) at aa:bb:cc:dd:ee:ff",
            "? (192.168.1.1 at aa:bb:cc:dd:ee:ff on en0",
            "? (192.168.1.300) at aa:bb:cc:dd:ee:ff on en0",
            "? (192.168.1.1) at zz:bb:cc:dd:ee:ff on en0",
            "? (192.168.1.1) at aa:bb:cc on en0",
            "? (192.168.1.1) at (incomplete) on en0",
        ] {
            assert_eq!(parse_line(line), None, "accepted: {line:?}");
        }
    }

    #[test]
    fn incomplete_and_good_line_yield_one_device() {
        let text: &str = "\
? (192.168.1.7) at (incomplete) on en0 ifscope [ethernet]
? (192.168.1.8) at AA-BB-CC-DD-EE-FF on en0 ifscope [ethernet]
";
        let responsive: HashSet<Ipv4Addr> = set(&[[192, 168, 1, 7], [192, 168, 1, 8]]);

        let devices: Vec<Device> = reconcile(text, &responsive, &classifier());

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].ip, Ipv4Addr::new(192, 168, 1, 8));
        assert_eq!(devices[0].mac.to_string(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn stale_cache_rows_are_ignored() {
        let responsive: HashSet<Ipv4Addr> = set(&[[192, 168, 1, 20]]);
        let devices: Vec<Device> = reconcile(MACOS, &responsive, &classifier());

        assert_eq!(devices.len(), 1);
        assert!(devices[0].is_embedded_sbc);
        assert_eq!(devices[0].category, "Raspberry Pi");
    }

    #[test]
    fn duplicate_rows_keep_first_and_sort_by_address() {
        let text: &str = "\
? (10.0.0.9) at b8:27:eb:00:00:09 on eth0
? (10.0.0.2) at 00:11:22:33:44:02 on eth0
? (10.0.0.9) at 00:11:22:33:44:99 on wlan0
";
        let responsive: HashSet<Ipv4Addr> = set(&[[10, 0, 0, 2], [10, 0, 0, 9]]);
        let devices: Vec<Device> = reconcile(text, &responsive, &classifier());

        let ips: Vec<Ipv4Addr> = devices.iter().map(|d| d.ip).collect();
        assert_eq!(ips, vec![Ipv4Addr::new(10, 0, 0, 2), Ipv4Addr::new(10, 0, 0, 9)]);
        assert_eq!(devices[1].mac.to_string(), "b8:27:eb:00:00:09");
    }

    #[test]
    fn empty_table_yields_nothing() {
        let responsive: HashSet<Ipv4Addr> = set(&[[10, 0, 0, 2]]);
        assert!(reconcile("", &responsive, &classifier()).is_empty());
    }

    #[tokio::test]
    async fn missing_command_is_an_error() {
        let command: ArpCommand = ArpCommand {
            program: "findpi-no-such-binary".to_string(),
            args: vec![],
        };
        assert!(command.neighbor_table().await.is_err());
    }
}
