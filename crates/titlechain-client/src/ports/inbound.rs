//! # Inbound Port
//!
//! API trait defining what the synchronization engine can do.

use crate::application::StateSnapshot;
use crate::domain::{AuthorizationState, ClientError};
use async_trait::async_trait;
use titlechain_types::Nat;

/// Session synchronization API - inbound port.
///
/// Operations are re-entrant per session: each re-evaluates the current
/// identity before touching the backend, and results carried across an
/// identity change are discarded.
#[async_trait]
pub trait SessionSyncApi: Send {
    /// Re-evaluate the session: detect identity changes, resolve the
    /// principal once per (identity, backend) pair, and fetch the
    /// identity-bound user record when the backend becomes ready.
    ///
    /// Returns the derived authorization state.
    async fn synchronize(&mut self) -> Result<AuthorizationState, ClientError>;

    /// Invoke the backend's identity-echo operation and store the
    /// returned principal text. Called at most once per
    /// (identity, backend handle) pair.
    async fn resolve_principal(&mut self) -> Result<(), ClientError>;

    /// Fetch the user record bound to the current identity and replace
    /// the cached record wholesale.
    async fn fetch_user_record(&mut self) -> Result<(), ClientError>;

    /// Register the current identity with the given national identity
    /// number. Success replaces the cached user record and stores the
    /// server message; rejection stores a fixed failure message.
    async fn register_user(&mut self, nik: Nat) -> Result<(), ClientError>;

    /// Register a land title. Success stores the returned record and
    /// the server message; rejection stores a fixed failure message.
    /// Never changes the authorization state.
    async fn register_land(&mut self, certificate_id: &str, price: Nat)
        -> Result<(), ClientError>;

    /// Fetch the full land collection, replacing the cached collection
    /// wholesale.
    async fn fetch_lands(&mut self) -> Result<(), ClientError>;

    /// Invoke the greeting operation and store the returned text.
    async fn greet(&mut self, name: &str) -> Result<(), ClientError>;

    /// Derive the current authorization state from the live inputs.
    fn authorization_state(&self) -> AuthorizationState;

    /// Serialize the current state for the presentation boundary.
    fn snapshot(&self) -> StateSnapshot;
}
