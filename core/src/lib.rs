//! Scanning engine for `findpi`.
//!
//! [`discovery::DiscoveryService`] ties the stages together. The stages are
//! usable on their own: [`scanner::Sweep`] for liveness, [`neighbor`] for the
//! ARP cache, [`vendors`] for MAC classification and [`statistics`] for the
//! summary tables.

pub mod discovery;
pub mod neighbor;
pub mod scanner;
pub mod statistics;
pub mod system;
pub mod vendors;
