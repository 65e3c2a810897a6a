//! # Titlechain Client
//!
//! Session/state synchronization engine for a decentralized land-title
//! registry.
//!
//! ## Purpose
//!
//! Given (a) the current identity, (b) backend connectivity, and (c) the
//! records fetched so far, decide what the user is authorized to do next
//! (register, view, add an asset) and keep displayed state consistent
//! with server state across asynchronous round trips.
//!
//! The engine owns all session-scoped state explicitly. Authorization is
//! never stored; it is derived from its three inputs on every
//! evaluation. A session change invalidates every cached record, and
//! responses that arrive after the session changed are discarded.
//!
//! ## Module Structure
//!
//! ```text
//! titlechain-client/
//! ├── domain/          # Authorization derivation, record cache, errors
//! ├── ports/           # API trait (inbound) + dependency traits (outbound)
//! ├── application/     # SyncEngine orchestrating everything + snapshots
//! ├── adapters/        # Shared session observer, in-memory registry backend
//! ├── actions/         # Thin request dispatchers for the presentation boundary
//! └── config.rs        # ClientConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actions;
pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use actions::{ActionDispatcher, DispatchOutcome};
pub use application::{StateSnapshot, SyncEngine};
pub use config::ClientConfig;
pub use domain::{
    derive_authorization, AuthorizationState, ClientError, RecordCache, SessionEpoch,
    LAND_REGISTRATION_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE,
};
pub use ports::{
    BackendConnection, BackendProvider, MockBackend, MockProvider, MockSession, SessionObserver,
    SessionSyncApi,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
