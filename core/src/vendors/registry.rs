//! Fallback to the IEEE registry shipped inside `mac_oui`.

use anyhow::anyhow;
use findpi_common::network::mac::OuiPrefix;
use findpi_common::vendors::Classification;
use mac_oui::Oui;

use super::manuf::categorize;

pub struct IeeeRegistry {
    db: Oui,
}

impl IeeeRegistry {
    /// Parses the bundled database. Takes a noticeable moment, so callers
    /// load it once and share it.
    pub fn load() -> anyhow::Result<Self> {
        let db: Oui = Oui::default().map_err(|e| anyhow!("failed to load OUI registry: {e:?}"))?;
        Ok(Self { db })
    }

    pub fn lookup(&self, prefix: &OuiPrefix) -> Option<Classification> {
        let mac: String = format!("{prefix}:00:00:00");
        match self.db.lookup_by_mac(&mac) {
            Ok(Some(entry)) => {
                let vendor: &str = entry.company_name.trim();
                Some(Classification::new(vendor, categorize(vendor)))
            }
            _ => None,
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
