//! The final, serialisable outcome of a scan.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Local, SecondsFormat};
use serde::{Serialize, Serializer};

use crate::network::device::Device;
use crate::network::subnet::Subnet;

/// Vendor and category frequency tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub vendors: BTreeMap<String, usize>,
    pub categories: BTreeMap<String, usize>,
}

/// Written out once, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    #[serde(serialize_with = "rfc3339")]
    pub timestamp: DateTime<Local>,
    #[serde(serialize_with = "display")]
    pub network: Subnet,
    #[serde(rename = "duration_seconds", serialize_with = "seconds")]
    pub duration: Duration,
    pub total_devices: usize,
    #[serde(rename = "raspberry_pi_count")]
    pub embedded_sbc_count: usize,
    pub devices: Vec<Device>,
    #[serde(rename = "manufacturer_statistics")]
    pub vendor_counts: BTreeMap<String, usize>,
    #[serde(rename = "category_statistics")]
    pub category_counts: BTreeMap<String, usize>,
}

impl ScanResult {
    pub fn new(
        network: Subnet,
        duration: Duration,
        devices: Vec<Device>,
        statistics: Statistics,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            network,
            duration,
            total_devices: devices.len(),
            embedded_sbc_count: devices.iter().filter(|d| d.is_embedded_sbc).count(),
            devices,
            vendor_counts: statistics.vendors,
            category_counts: statistics.categories,
        }
    }

    pub fn embedded_sbcs(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter().filter(|d| d.is_embedded_sbc)
    }
}

fn rfc3339<S: Serializer>(ts: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, false))
}

fn display<S: Serializer>(subnet: &Subnet, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(subnet)
}

fn seconds<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
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
    use crate::vendors::Classification;
    use std::net::Ipv4Addr;

    fn sample() -> ScanResult {
        let devices: Vec<Device> = vec![
            Device::new(
                Ipv4Addr::new(10, 0, 0, 5),
                "b8:27:eb:00:00:01".parse().unwrap(),
                Classification::embedded_sbc("Raspberry Pi Foundation"),
            ),
            Device::new(
                Ipv4Addr::new(10, 0, 0, 7),
                "00:00:00:00:00:01".parse().unwrap(),
                Classification::unknown(),
            ),
        ];
        let statistics: Statistics = Statistics {
            vendors: BTreeMap::from([
                ("Raspberry Pi Foundation".to_string(), 1),
                ("Unknown".to_string(), 1),
            ]),
            categories: BTreeMap::from([
                ("Raspberry Pi".to_string(), 1),
                ("Unknown".to_string(), 1),
            ]),
        };
        ScanResult::new(
            Subnet::enclosing(Ipv4Addr::new(10, 0, 0, 5)),
            Duration::from_millis(2_500),
            devices,
            statistics,
        )
    }

    #[test]
    fn counts_are_derived_from_devices() {
        let result: ScanResult = sample();
        assert_eq!(result.total_devices, 2);
        assert_eq!(result.embedded_sbc_count, 1);
        assert_eq!(result.embedded_sbcs().count(), 1);
    }

    #[test]
    fn json_field_names() {
        let value: serde_json::Value = serde_json::to_value(sample()).unwrap();
        for field in [
            "timestamp",
            "network",
            "duration_seconds",
            "total_devices",
            "raspberry_pi_count",
            "devices",
            "manufacturer_statistics",
            "category_statistics",
        ] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
        assert_eq!(value["network"], "10.0.0.0/24");
        assert_eq!(value["duration_seconds"], 2.5);
        assert_eq!(value["manufacturer_statistics"]["Unknown"], 1);
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let value: serde_json::Value = serde_json::to_value(sample()).unwrap();
        let raw: &str = value["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok(), "not RFC3339: {raw}");
    }
}
