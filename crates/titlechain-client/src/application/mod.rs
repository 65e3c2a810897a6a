//! # Application Module
//!
//! The synchronization engine orchestrating the domain and the outbound
//! ports, plus the snapshot it serializes for the presentation boundary.

pub mod service;
pub mod snapshot;

pub use service::SyncEngine;
pub use snapshot::StateSnapshot;
