//! # Domain Module
//!
//! Core domain logic for session synchronization: authorization
//! derivation, the session-scoped record cache, and error types.

pub mod cache;
pub mod errors;
pub mod invariants;
pub mod state;

pub use cache::*;
pub use errors::*;
pub use invariants::*;
pub use state::*;
