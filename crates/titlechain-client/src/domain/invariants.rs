//! # Domain Invariants
//!
//! Rules that must always hold across the synchronization engine.

use super::cache::RecordCache;
use titlechain_types::{OperationResult, Principal, STATUS_OK};

/// Message displayed when user registration is rejected.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";

/// Message displayed when land registration is rejected.
pub const LAND_REGISTRATION_FAILED_MESSAGE: &str = "Land registration failed";

/// Invariant: a result payload is present only on success.
pub fn invariant_payload_on_success<T>(result: &OperationResult<T>) -> bool {
    (result.code == STATUS_OK) || result.payload.is_none()
}

/// Invariant: a signed-out session holds no cached records.
pub fn invariant_cleared_when_signed_out(
    identity: Option<&Principal>,
    cache: &RecordCache,
) -> bool {
    identity.is_some() || cache.is_empty()
}
