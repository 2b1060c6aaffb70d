use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that stop a scan before any probe is sent.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no network interfaces found")]
    NoInterfaces,

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("invalid base address: {0}")]
    InvalidBaseAddress(String),

    #[error("failed to read OUI table {path}")]
    OuiFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    OuiTable(#[from] OuiTableError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacParseError {
    #[error("expected 6 octets in MAC address '{0}'")]
    OctetCount(String),

    #[error("invalid hex octet '{octet}' in MAC address '{input}'")]
    InvalidOctet { input: String, octet: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OuiTableError {
    #[error("duplicate OUI prefix {0}")]
    DuplicatePrefix(String),

    #[error("invalid OUI prefix '{0}'")]
    InvalidPrefix(String),
}
