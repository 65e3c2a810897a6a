//! # Client Configuration

use serde::{Deserialize, Serialize};
use titlechain_types::Principal;

/// Synchronization client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Fetch the identity-bound user record automatically when the
    /// backend handle becomes ready.
    pub auto_fetch_user: bool,

    /// Principal text displayed for signed-out sessions.
    pub anonymous_principal: Principal,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auto_fetch_user: true,
            anonymous_principal: Principal::anonymous(),
        }
    }
}

impl ClientConfig {
    /// Create a config for testing (no automatic fetching).
    pub fn for_testing() -> Self {
        Self {
            auto_fetch_user: false,
            anonymous_principal: Principal::anonymous(),
        }
    }
}
