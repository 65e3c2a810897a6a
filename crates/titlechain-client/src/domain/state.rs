//! # Authorization Derivation
//!
//! The four-state machine the presentation boundary renders. The state
//! is never stored: it is a pure function of the current identity, the
//! backend handle's readiness, and the last-fetched user record, and is
//! re-derived whenever one of those inputs changes.

use serde::{Deserialize, Serialize};
use titlechain_types::{Principal, UserRecord};

/// What the current session is authorized to do next.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthorizationState {
    /// No identity present.
    Unauthenticated,
    /// Identity present, backend handle not ready yet.
    AwaitingBackend,
    /// Identity and backend ready, no user record for this identity.
    Unregistered,
    /// Identity and backend ready, the fetched record belongs to this
    /// identity.
    Registered,
}

/// Derive the authorization state from its three inputs.
///
/// A user record fetched for a previous identity never grants
/// `Registered`: the record must reference the current identity.
pub fn derive_authorization(
    identity: Option<&Principal>,
    backend_ready: bool,
    user: Option<&UserRecord>,
) -> AuthorizationState {
    let Some(identity) = identity else {
        return AuthorizationState::Unauthenticated;
    };
    if !backend_ready {
        return AuthorizationState::AwaitingBackend;
    }
    match user {
        Some(record) if record.references(identity) => AuthorizationState::Registered,
        _ => AuthorizationState::Unregistered,
    }
}
