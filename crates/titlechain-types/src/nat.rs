//! # Wide Unsigned Integers
//!
//! National identity numbers and land prices are wide unsigned integers
//! that native floating-point display cannot represent exactly. [`Nat`]
//! keeps them as 256-bit integers end to end and converts to decimal
//! text only at the presentation boundary.

use primitive_types::U256;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing decimal text into a [`Nat`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseNatError {
    /// Input was empty.
    #[error("empty input")]
    Empty,

    /// Input contained a character outside `0-9`.
    #[error("non-digit character {0:?}")]
    NonDigit(char),

    /// Value does not fit in 256 bits.
    #[error("value exceeds 256 bits")]
    Overflow,
}

/// Wide unsigned integer (256-bit).
///
/// Parses from decimal-digit-only text and serializes as a decimal
/// string, so values survive JSON boundaries that cannot carry large
/// integers natively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nat(U256);

impl Nat {
    /// Zero.
    pub fn zero() -> Self {
        Self(U256::zero())
    }

    /// Is this value zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parse from decimal-digit-only text.
    ///
    /// # Errors
    /// - `Empty` if the input has no characters
    /// - `NonDigit` on the first character outside `0-9`
    /// - `Overflow` if the value does not fit in 256 bits
    pub fn from_dec_str(text: &str) -> Result<Self, ParseNatError> {
        if text.is_empty() {
            return Err(ParseNatError::Empty);
        }
        if let Some(c) = text.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseNatError::NonDigit(c));
        }
        U256::from_dec_str(text)
            .map(Self)
            .map_err(|_| ParseNatError::Overflow)
    }

    /// Decimal text form.
    pub fn to_dec_string(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // U256 displays in decimal.
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Nat {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl FromStr for Nat {
    type Err = ParseNatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dec_str(s)
    }
}

impl Serialize for Nat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_dec_string())
    }
}

struct NatVisitor;

impl Visitor<'_> for NatVisitor {
    type Value = Nat;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or unsigned integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Nat::from_dec_str(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Nat::from(v))
    }
}

impl<'de> Deserialize<'de> for Nat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NatVisitor)
    }
}
