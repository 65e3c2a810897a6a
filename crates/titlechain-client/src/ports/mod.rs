//! # Ports Module
//!
//! Inbound API trait plus outbound dependency traits and their mock
//! implementations.

pub mod inbound;
pub mod outbound;

pub use inbound::SessionSyncApi;
pub use outbound::{
    BackendConnection, BackendProvider, MockBackend, MockProvider, MockSession, SessionObserver,
};
