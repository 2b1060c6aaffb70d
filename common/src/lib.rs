//! Shared types for the `findpi` workspace.
//!
//! Everything that more than one crate needs lives here: the scan
//! [`config::Config`], the error taxonomy, network value types, the backend
//! traits the discovery pipeline is generic over, and the serialisable
//! report model.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod report;
pub mod scanning;
pub mod system;
pub mod vendors;
