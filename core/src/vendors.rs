//! MAC prefix to vendor classification.
//!
//! Lookups go to an in-memory [`OuiTable`] first. The table starts from the
//! curated [`OuiTable::builtin`] set and can be widened with a Wireshark
//! `manuf` file. Prefixes the table misses can optionally fall through to the
//! IEEE registry bundled with `mac_oui`.

mod builtin;
pub mod manuf;
pub mod registry;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use findpi_common::error::{OuiTableError, ScanError};
use findpi_common::network::mac::OuiPrefix;
use findpi_common::vendors::{Classification, VendorRepository};
use tracing::debug;

use registry::IeeeRegistry;

/// Prefixes assigned to Raspberry Pi boards. These always classify as
/// embedded single-board computers regardless of which source named them.
pub const EMBEDDED_SBC_PREFIXES: [OuiPrefix; 6] = [
    OuiPrefix([0xb8, 0x27, 0xeb]),
    OuiPrefix([0xdc, 0xa6, 0x32]),
    OuiPrefix([0xe4, 0x5f, 0x01]),
    OuiPrefix([0x28, 0xcd, 0xc1]),
    OuiPrefix([0xd8, 0x3a, 0xdd]),
    OuiPrefix([0x2c, 0xcf, 0x67]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OuiEntry {
    pub prefix: OuiPrefix,
    pub vendor: String,
    pub category: String,
}

impl OuiEntry {
    pub fn new(prefix: OuiPrefix, vendor: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            prefix,
            vendor: vendor.into(),
            category: category.into(),
        }
    }
}

/// Immutable once handed to an [`OuiClassifier`].
#[derive(Debug, Clone, Default)]
pub struct OuiTable {
    entries: HashMap<OuiPrefix, OuiEntry>,
}

impl OuiTable {
    /// Builds a table where every prefix must be unique.
    pub fn from_entries<I>(entries: I) -> Result<Self, OuiTableError>
    where
        I: IntoIterator<Item = OuiEntry>,
    {
        let mut table: OuiTable = OuiTable::default();
        for entry in entries {
            let prefix: OuiPrefix = entry.prefix;
            if table.entries.insert(prefix, entry).is_some() {
                return Err(OuiTableError::DuplicatePrefix(prefix.to_string()));
            }
        }
        Ok(table)
    }

    /// The curated table compiled into the binary.
    pub fn builtin() -> Self {
        let mut table: OuiTable = OuiTable::default();
        table.merge(builtin_entries().filter_map(Result::ok));
        table
    }

    /// Adds entries whose prefix is not yet present. Existing entries win.
    /// Returns how many were added.
    pub fn merge<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = OuiEntry>,
    {
        let before: usize = self.entries.len();
        for entry in entries {
            self.entries.entry(entry.prefix).or_insert(entry);
        }
        self.entries.len() - before
    }

    /// Merges the rows of a Wireshark `manuf` file.
    pub fn load_manuf_file(&mut self, path: &Path) -> Result<usize, ScanError> {
        let text: String = std::fs::read_to_string(path).map_err(|source| ScanError::OuiFile {
            path: path.to_path_buf(),
            source,
        })?;
        let added: usize = self.merge(manuf::parse(&text));
        debug!("{added} prefixes added from {}", path.display());
        Ok(added)
    }

    pub fn get(&self, prefix: &OuiPrefix) -> Option<&OuiEntry> {
        self.entries.get(prefix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn builtin_entries() -> impl Iterator<Item = Result<OuiEntry, OuiTableError>> {
    builtin::BUILTIN.iter().map(|&(prefix, vendor, category)| {
        let prefix: OuiPrefix = prefix
            .parse()
            .map_err(|_| OuiTableError::InvalidPrefix(prefix.to_string()))?;
        Ok(OuiEntry::new(prefix, vendor, category))
    })
}

/// [`VendorRepository`] over an [`OuiTable`], with an optional IEEE registry
/// fallback for prefixes the table does not know.
pub struct OuiClassifier {
    table: OuiTable,
    registry: Option<IeeeRegistry>,
    embedded_sbc: HashSet<OuiPrefix>,
}

impl OuiClassifier {
    pub fn new(table: OuiTable) -> Self {
        Self {
            table,
            registry: None,
            embedded_sbc: EMBEDDED_SBC_PREFIXES.into_iter().collect(),
        }
    }

    pub fn with_registry(mut self, registry: IeeeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    fn lookup(&self, prefix: &OuiPrefix) -> Classification {
        if let Some(entry) = self.table.get(prefix) {
            return Classification::new(&entry.vendor, &entry.category);
        }
        self.registry
            .as_ref()
            .and_then(|registry| registry.lookup(prefix))
            .unwrap_or_else(Classification::unknown)
    }
}

impl VendorRepository for OuiClassifier {
    fn classify(&self, mac: &str) -> Classification {
        let Some(prefix) = OuiPrefix::from_mac_str(mac) else {
            return Classification::unknown();
        };

        let classification: Classification = self.lookup(&prefix);
        if self.embedded_sbc.contains(&prefix) {
            return Classification::embedded_sbc(classification.vendor);
        }
        classification
    }

    fn len(&self) -> usize {
        self.table.len()
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
    use std::io::Write;

    fn prefix(s: &str) -> OuiPrefix {
        s.parse().unwrap()
    }

    #[test]
    fn builtin_table_is_well_formed() {
        let entries: Vec<OuiEntry> = builtin_entries().collect::<Result<_, _>>().unwrap();
        let table: OuiTable = OuiTable::from_entries(entries).unwrap();
        assert_eq!(table.len(), builtin::BUILTIN.len());
        assert_eq!(OuiTable::builtin().len(), table.len());
    }

    #[test]
    fn builtin_lists_every_sbc_prefix() {
        let table: OuiTable = OuiTable::builtin();
        for sbc in EMBEDDED_SBC_PREFIXES {
            let entry: &OuiEntry = table.get(&sbc).expect("sbc prefix missing");
            assert_eq!(entry.category, "Raspberry Pi");
        }
    }

    #[test]
    fn raspberry_pi_prefix_is_embedded_sbc() {
        let classifier: OuiClassifier = OuiClassifier::new(OuiTable::builtin());
        let c: Classification = classifier.classify("b8:27:eb:12:34:56");

        assert_eq!(c.vendor, "Raspberry Pi Foundation");
        assert_eq!(c.category, "Raspberry Pi");
        assert!(c.is_embedded_sbc);
    }

    #[test]
    fn notation_does_not_matter() {
        let classifier: OuiClassifier = OuiClassifier::new(OuiTable::builtin());
        for mac in ["DC-A6-32-00-00-01", "dca6.3200.0001", "dc:a6:32"] {
            assert!(classifier.classify(mac).is_embedded_sbc, "{mac}");
        }
    }

    #[test]
    fn misses_are_unknown() {
        let classifier: OuiClassifier = OuiClassifier::new(OuiTable::builtin());
        assert_eq!(classifier.classify("ff:ff:ff"), Classification::unknown());
        assert_eq!(classifier.classify("b8:27"), Classification::unknown());
        assert_eq!(classifier.classify(""), Classification::unknown());
        assert_eq!(classifier.classify("zz:zz:zz:zz:zz:zz"), Classification::unknown());
    }

    #[test]
    fn sbc_prefix_overrides_table_category() {
        let table: OuiTable = OuiTable::from_entries([OuiEntry::new(
            prefix("2c:cf:67"),
            "Some Reseller",
            "Computer",
        )])
        .unwrap();
        let c: Classification = OuiClassifier::new(table).classify("2c:cf:67:00:00:00");

        assert_eq!(c, Classification::embedded_sbc("Some Reseller"));
    }

    #[test]
    fn synthetic_table_classifies() {
        let table: OuiTable = OuiTable::from_entries([
            OuiEntry::new(prefix("aa:bb:cc"), "Acme", "Widgets"),
            OuiEntry::new(prefix("11:22:33"), "Initech", "Computer"),
        ])
        .unwrap();
        let classifier: OuiClassifier = OuiClassifier::new(table);

        assert_eq!(classifier.len(), 2);
        assert_eq!(
            classifier.classify("AA:BB:CC:00:11:22"),
            Classification::new("Acme", "Widgets")
        );
        assert!(classifier.classify("aa:bb:cd:00:11:22").is_unknown());
    }

    #[test]
    fn duplicate_prefixes_are_rejected() {
        let err: OuiTableError = OuiTable::from_entries([
            OuiEntry::new(prefix("aa:bb:cc"), "Acme", "Widgets"),
            OuiEntry::new(prefix("AA-BB-CC"), "Other", "Widgets"),
        ])
        .unwrap_err();
        assert_eq!(err, OuiTableError::DuplicatePrefix("aa:bb:cc".to_string()));
    }

    #[test]
    fn manuf_file_never_overrides_existing_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "B8:27:EB\tRaspberr\tSomeone Else").unwrap();
        writeln!(file, "AA:BB:CC\tAcme\tAcme Widgets Inc.").unwrap();

        let mut table: OuiTable = OuiTable::builtin();
        let before: usize = table.len();
        let added: usize = table.load_manuf_file(file.path()).unwrap();

        assert_eq!(added, 1);
        assert_eq!(table.len(), before + 1);
        assert_eq!(table.get(&prefix("b8:27:eb")).unwrap().vendor, "Raspberry Pi Foundation");
        assert_eq!(table.get(&prefix("aa:bb:cc")).unwrap().vendor, "Acme Widgets Inc.");
    }

    #[test]
    fn missing_manuf_file_is_an_error() {
        let mut table: OuiTable = OuiTable::default();
        let err: ScanError = table
            .load_manuf_file(Path::new("/nonexistent/findpi/manuf"))
            .unwrap_err();
        assert!(matches!(err, ScanError::OuiFile { .. }));
    }
}
