//! # Input Translation
//!
//! Syntactic validation of user-supplied text before it reaches the
//! engine. Reject garbage at the gate - the backend never sees
//! untranslated input.

use crate::domain::ClientError;
use titlechain_types::Nat;

/// Parse decimal-digit-only text into a wide integer.
///
/// # Errors
/// `InvalidInput` naming the field when the text is empty, contains a
/// non-digit, or overflows 256 bits.
pub fn parse_nat(field: &'static str, text: &str) -> Result<Nat, ClientError> {
    Nat::from_dec_str(text.trim()).map_err(|source| ClientError::InvalidInput { field, source })
}
