//! Link-layer addresses as reported by the neighbor cache.
//!
//! Operating systems disagree on how a MAC is printed: Linux uses
//! `aa:bb:cc:dd:ee:ff`, Windows `aa-bb-cc-dd-ee-ff`, BSD drops leading zeros
//! (`0:1b:2:dd:e:ff`) and some network gear prints `aabb.ccdd.eeff`. All of
//! them are folded into one canonical, lowercase, colon separated form here
//! so comparisons and OUI lookups never depend on the source.

use std::fmt;
use std::str::FromStr;

use pnet::util::MacAddr;
use serde::{Serialize, Serializer};

use crate::error::MacParseError;

/// Length of a `xx:xx:xx` prefix string.
pub const OUI_PREFIX_LEN: usize = 8;

/// A MAC address in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress(MacAddr);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        let [a, b, c, d, e, f] = octets;
        Self(MacAddr::new(a, b, c, d, e, f))
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0.octets()
    }

    /// The manufacturer part of the address.
    pub fn oui(&self) -> OuiPrefix {
        let [a, b, c, ..] = self.octets();
        OuiPrefix([a, b, c])
    }
}

impl From<MacAddr> for MacAddress {
    fn from(mac: MacAddr) -> Self {
        Self(mac)
    }
}

impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input: &str = s.trim();
        let groups: Vec<&str> = if input.contains('.') {
            split_dotted(input)?
        } else {
            input.split([':', '-']).collect()
        };

        if groups.len() != 6 {
            return Err(MacParseError::OctetCount(input.to_string()));
        }

        let mut octets: [u8; 6] = [0; 6];
        for (slot, group) in octets.iter_mut().zip(&groups) {
            *slot = parse_octet(group).ok_or_else(|| MacParseError::InvalidOctet {
                input: input.to_string(),
                octet: group.to_string(),
            })?;
        }

        Ok(Self::new(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.octets();
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// First three octets of a MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OuiPrefix(pub [u8; 3]);

impl OuiPrefix {
    /// Extracts the prefix from the leading characters of a MAC string.
    ///
    /// Accepts anything that starts with three octets in one of the supported
    /// notations (`aa:bb:cc`, `aa-bb-cc`, `aabb.cc..`, `aabbcc`). Strings shorter
    /// than [`OUI_PREFIX_LEN`] never yield a prefix.
    pub fn from_mac_str(mac: &str) -> Option<Self> {
        let mac: &str = mac.trim();
        if mac.len() < OUI_PREFIX_LEN {
            return None;
        }

        if let Ok(full) = mac.parse::<MacAddress>() {
            return Some(full.oui());
        }

        let hex: String = mac
            .chars()
            .filter(|c| !matches!(c, ':' | '-' | '.'))
            .take(6)
            .collect();
        if hex.len() != 6 {
            return None;
        }

        let mut octets: [u8; 3] = [0; 3];
        for (i, slot) in octets.iter_mut().enumerate() {
            *slot = u8::from_str_radix(hex.get(i * 2..i * 2 + 2)?, 16).ok()?;
        }
        Some(Self(octets))
    }
}

impl FromStr for OuiPrefix {
    type Err = MacParseError;

    /// Strict parse of exactly three octets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Vec<&str> = s.trim().split([':', '-']).collect();
        if groups.len() != 3 {
            return Err(MacParseError::OctetCount(s.to_string()));
        }

        let mut octets: [u8; 3] = [0; 3];
        for (slot, group) in octets.iter_mut().zip(&groups) {
            *slot = parse_octet(group).ok_or_else(|| MacParseError::InvalidOctet {
                input: s.to_string(),
                octet: group.to_string(),
            })?;
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for OuiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}")
    }
}

fn parse_octet(group: &str) -> Option<u8> {
    if group.is_empty() || group.len() > 2 {
        return None;
    }
    u8::from_str_radix(group, 16).ok()
}

/// `aabb.ccdd.eeff` → `["aa", "bb", "cc", "dd", "ee", "ff"]`
fn split_dotted(input: &str) -> Result<Vec<&str>, MacParseError> {
    let words: Vec<&str> = input.split('.').collect();
    if words.len() != 3 || words.iter().any(|w| w.len() != 4 || !w.is_ascii()) {
        return Err(MacParseError::OctetCount(input.to_string()));
    }
    Ok(words.iter().flat_map(|w| [&w[..2], &w[2..]]).collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
