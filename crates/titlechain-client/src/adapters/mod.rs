//! # Adapters Module
//!
//! Concrete implementations of the outbound ports: the shared session
//! observer bridging the identity provider, and an in-memory registry
//! backend used as the reference implementation in tests and demos.

pub mod memory_backend;
pub mod session;

pub use memory_backend::{InMemoryBackend, InMemoryLedger, LedgerProvider};
pub use session::SharedSession;
