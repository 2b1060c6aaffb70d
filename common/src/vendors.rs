//! Vendor classification contract.

pub const UNKNOWN: &str = "Unknown";

/// Category assigned to curated single-board computer prefixes.
pub const EMBEDDED_SBC_CATEGORY: &str = "Raspberry Pi";

/// What a MAC address says about the device behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub vendor: String,
    pub category: String,
    pub is_embedded_sbc: bool,
}

impl Classification {
    pub fn new(vendor: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            category: category.into(),
            is_embedded_sbc: false,
        }
    }

    /// The miss case. Unknown vendors are normal, not an error.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN)
    }

    pub fn embedded_sbc(vendor: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            category: EMBEDDED_SBC_CATEGORY.to_string(),
            is_embedded_sbc: true,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.vendor == UNKNOWN
    }
}

/// Defines the contract for resolving device manufacturers from MAC addresses.
pub trait VendorRepository: Send + Sync {
    /// Classifies a MAC address given in any common notation.
    ///
    /// Never fails: anything that cannot be looked up yields
    /// [`Classification::unknown`].
    fn classify(&self, mac: &str) -> Classification;

    /// Number of prefixes the repository knows about.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
