//! # Domain Errors

use thiserror::Error;
use titlechain_types::ParseNatError;

/// Synchronization client error types.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No identity is signed in; the operation needs one.
    #[error("No identity signed in")]
    NotAuthenticated,

    /// The backend handle is not ready yet. Callers treat this as
    /// "loading", never as a user-visible error.
    #[error("Backend handle not ready")]
    BackendNotReady,

    /// User-supplied text failed input translation.
    #[error("Invalid {field}: {source}")]
    InvalidInput {
        /// Name of the offending input field.
        field: &'static str,
        /// Underlying parse failure.
        source: ParseNatError,
    },

    /// The backend call itself failed at the network/protocol level.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A shared lock was poisoned by a panicking writer.
    #[error("Lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_not_ready_message() {
        let err = ClientError::BackendNotReady;
        assert!(err.to_string().contains("not ready"));
    }

    #[test]
    fn test_invalid_input_names_field() {
        let err = ClientError::InvalidInput {
            field: "nik",
            source: ParseNatError::NonDigit('x'),
        };
        let text = err.to_string();
        assert!(text.contains("nik"));
        assert!(text.contains("'x'"));
    }

    #[test]
    fn test_transport_error_carries_detail() {
        let err = ClientError::Transport("connection reset".to_string());
        assert!(err.to_string().contains("connection reset"));
    }
}
