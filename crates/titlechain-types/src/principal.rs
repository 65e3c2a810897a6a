//! # Principal
//!
//! Textual principal identifiers issued by the identity provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual form of the anonymous principal, shown for signed-out sessions.
pub const ANONYMOUS_PRINCIPAL_TEXT: &str = "2vxsx-fae";

/// A stable identifier for an authenticated party.
///
/// The client treats principals as opaque text; equality is the only
/// operation the synchronization engine performs on them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Create a principal from its textual form.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The well-known anonymous principal.
    pub fn anonymous() -> Self {
        Self(ANONYMOUS_PRINCIPAL_TEXT.to_string())
    }

    /// Is this the anonymous principal?
    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_PRINCIPAL_TEXT
    }

    /// Textual form.
    pub fn as_text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
