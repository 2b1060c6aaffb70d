use std::fmt;
use std::net::Ipv4Addr;

use serde::Serialize;

use crate::network::mac::MacAddress;
use crate::vendors::Classification;

/// A host that answered a probe and has a resolved neighbor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub ip: Ipv4Addr,
    pub mac: MacAddress,
    #[serde(rename = "manufacturer")]
    pub vendor: String,
    pub category: String,
    #[serde(rename = "is_raspberry_pi")]
    pub is_embedded_sbc: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl Device {
    pub fn new(ip: Ipv4Addr, mac: MacAddress, classification: Classification) -> Self {
        Self {
            ip,
            mac,
            vendor: classification.vendor,
            category: classification.category,
            is_embedded_sbc: classification.is_embedded_sbc,
            hostname: None,
        }
    }

    pub fn with_hostname(mut self, hostname: Option<String>) -> Self {
        self.hostname = hostname.filter(|name| !name.is_empty());
        self
    }
}

/// The `devicesfound.txt` line format.
impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ip:{} mac:{} manufacturer:{} category:{}",
            self.ip, self.mac, self.vendor, self.category
        )?;
        if let Some(hostname) = &self.hostname {
            write!(f, " hostname:{hostname}")?;
        }
        if self.is_embedded_sbc {
            write!(f, " [Raspberry Pi]")?;
        }
        Ok(())
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

    fn pi() -> Device {
        Device::new(
            Ipv4Addr::new(192, 168, 1, 20),
            "DC:A6:32:01:02:03".parse().unwrap(),
            Classification::embedded_sbc("Raspberry Pi Trading Ltd"),
        )
    }

    #[test]
    fn line_format_without_hostname() {
        let device: Device = Device::new(
            Ipv4Addr::new(192, 168, 1, 1),
            "00:11:22:33:44:55".parse().unwrap(),
            Classification::unknown(),
        );
        assert_eq!(
            device.to_string(),
            "ip:192.168.1.1 mac:00:11:22:33:44:55 manufacturer:Unknown category:Unknown"
        );
    }

    #[test]
    fn line_format_with_hostname_and_marker() {
        let device: Device = pi().with_hostname(Some("pi.lan".to_string()));
        assert_eq!(
            device.to_string(),
            "ip:192.168.1.20 mac:dc:a6:32:01:02:03 manufacturer:Raspberry Pi Trading Ltd \
             category:Raspberry Pi hostname:pi.lan [Raspberry Pi]"
        );
    }

    #[test]
    fn empty_hostname_is_dropped() {
        assert_eq!(pi().with_hostname(Some(String::new())).hostname, None);
    }

    #[test]
    fn json_shape() {
        let value: serde_json::Value = serde_json::to_value(pi()).unwrap();
        assert_eq!(value["ip"], "192.168.1.20");
        assert_eq!(value["mac"], "dc:a6:32:01:02:03");
        assert_eq!(value["manufacturer"], "Raspberry Pi Trading Ltd");
        assert_eq!(value["category"], "Raspberry Pi");
        assert_eq!(value["is_raspberry_pi"], true);
        assert!(value.get("hostname").is_none());
    }
}
