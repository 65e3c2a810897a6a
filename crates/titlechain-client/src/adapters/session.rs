//! # Shared Session Observer
//!
//! Bridges the identity provider's login/logout lifecycle into the
//! `SessionObserver` port. The provider's callbacks write the identity;
//! the engine reads it as a single authoritative value.

use crate::ports::SessionObserver;
use std::sync::RwLock;
use titlechain_types::Principal;
use tracing::info;

/// Thread-safe slot holding the signed-in identity.
#[derive(Default)]
pub struct SharedSession {
    identity: RwLock<Option<Principal>>,
}

impl SharedSession {
    /// Create a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed sign-in.
    pub fn sign_in(&self, identity: Principal) {
        info!(identity = %identity, "Identity signed in");
        if let Ok(mut slot) = self.identity.write() {
            *slot = Some(identity);
        }
    }

    /// Record a sign-out.
    pub fn sign_out(&self) {
        info!("Identity signed out");
        if let Ok(mut slot) = self.identity.write() {
            *slot = None;
        }
    }
}

impl SessionObserver for SharedSession {
    fn current_identity(&self) -> Option<Principal> {
        // A poisoned slot reads as signed out.
        self.identity.read().ok().and_then(|slot| slot.clone())
    }
}
