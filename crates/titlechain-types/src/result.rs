//! # Operation Results
//!
//! The uniform `(code, message, optional payload)` envelope returned by
//! every mutating backend operation.

use serde::{Deserialize, Serialize};

/// Status code signalling success.
pub const STATUS_OK: u32 = 200;

/// Result envelope for a mutating backend operation.
///
/// The payload is present only when `code == STATUS_OK`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationResult<T> {
    /// Status code; `200` means success.
    pub code: u32,
    /// Human-readable server message.
    pub message: String,
    /// Result payload, present only on success.
    pub payload: Option<T>,
}

impl<T> OperationResult<T> {
    /// Create a successful result carrying a payload.
    pub fn ok(message: impl Into<String>, payload: T) -> Self {
        Self {
            code: STATUS_OK,
            message: message.into(),
            payload: Some(payload),
        }
    }

    /// Create a rejected result with no payload.
    pub fn rejected(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            payload: None,
        }
    }

    /// Did the operation succeed with a payload?
    pub fn is_success(&self) -> bool {
        self.code == STATUS_OK && self.payload.is_some()
    }
}
