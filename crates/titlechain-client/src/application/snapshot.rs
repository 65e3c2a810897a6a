//! # State Snapshot
//!
//! The serialized view of the engine's state consumed by the
//! presentation boundary. Records are rendered as pretty-printed JSON
//! text with wide-integer fields in decimal, since native numeric
//! display cannot represent them exactly.

use crate::domain::AuthorizationState;
use serde::Serialize;

/// Everything the presentation boundary needs to render one frame.
///
/// `None` fields mean "nothing fetched yet"; the presentation layer
/// supplies its own placeholder text for those.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Derived authorization state.
    pub state: AuthorizationState,
    /// Resolved principal text; the anonymous principal when signed out.
    pub principal: Option<String>,
    /// Serialized user record.
    pub user: Option<String>,
    /// Serialized record from the most recent land registration.
    pub land: Option<String>,
    /// Serialized land collection.
    pub lands: Option<String>,
    /// Message from the most recent mutating action.
    pub message: Option<String>,
    /// Greeting text.
    pub greeting: Option<String>,
}

/// Render a record as pretty-printed JSON text.
pub(crate) fn render_json<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string_pretty(value).ok()
}
