//! # Session-Scoped Record Cache
//!
//! Holds the last-fetched records for the current session. Every write
//! is a wholesale replacement of one slot, and the whole cache is
//! cleared when the session identity changes.
//!
//! Cache writes are tagged with a [`SessionEpoch`]: a response that
//! started its round trip under an earlier epoch belongs to a session
//! that no longer exists and must be discarded, never applied.

use titlechain_types::{LandRecord, UserRecord};

/// Identifies one session generation.
///
/// Bumped on every identity change; in-flight responses carry the epoch
/// they were issued under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionEpoch(u64);

impl SessionEpoch {
    /// The first epoch.
    pub fn initial() -> Self {
        Self(0)
    }

    /// The epoch after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Numeric value, for logging.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Last-fetched records and display text for the current session.
#[derive(Clone, Debug, Default)]
pub struct RecordCache {
    /// Last-fetched user record; `None` until the first lookup completes.
    pub(crate) user: Option<UserRecord>,
    /// Last-fetched land collection, replaced wholesale on each query;
    /// `None` until the first query completes.
    pub(crate) lands: Option<Vec<LandRecord>>,
    /// Land returned by the most recent registration.
    pub(crate) last_registered: Option<LandRecord>,
    /// Message from the most recent mutating action.
    pub(crate) message: Option<String>,
    /// Greeting returned by the greet operation.
    pub(crate) greeting: Option<String>,
}

impl RecordCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last-fetched user record.
    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    /// Last-fetched land collection, if a query has completed.
    pub fn lands(&self) -> Option<&[LandRecord]> {
        self.lands.as_deref()
    }

    /// Land returned by the most recent registration.
    pub fn last_registered(&self) -> Option<&LandRecord> {
        self.last_registered.as_ref()
    }

    /// Message from the most recent mutating action.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Greeting returned by the greet operation.
    pub fn greeting(&self) -> Option<&str> {
        self.greeting.as_deref()
    }

    /// Is every slot empty?
    pub fn is_empty(&self) -> bool {
        self.user.is_none()
            && self.lands.is_none()
            && self.last_registered.is_none()
            && self.message.is_none()
            && self.greeting.is_none()
    }

    /// Drop everything. Called on session change; stale data must never
    /// be shown for a session that no longer exists.
    pub fn clear(&mut self) {
        self.user = None;
        self.lands = None;
        self.last_registered = None;
        self.message = None;
        self.greeting = None;
    }
}
