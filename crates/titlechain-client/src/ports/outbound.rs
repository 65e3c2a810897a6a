//! # Outbound Ports
//!
//! Traits for external dependencies: the identity session, the backend
//! handle provider, and the backend connection itself.

use crate::domain::ClientError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use titlechain_types::{LandRecord, Nat, OperationResult, Principal, UserRecord};

/// Backend connection - outbound port.
///
/// A ready-to-invoke reference to the remote registry's operations,
/// already bound to the calling identity. Wire encoding is owned by the
/// transport collaborator.
#[async_trait]
pub trait BackendConnection: Send + Sync {
    /// Echo the caller's principal.
    async fn whoami(&self) -> Result<Principal, ClientError>;

    /// Look up the user record bound to the caller. Returns the empty
    /// record when no registration exists yet.
    async fn get_user_by_principal(&self) -> Result<UserRecord, ClientError>;

    /// Register the caller with a national identity number.
    async fn register_user(&self, nik: Nat) -> Result<OperationResult<UserRecord>, ClientError>;

    /// Register a land title owned by the caller.
    async fn register_land(
        &self,
        certificate_id: &str,
        price: Nat,
    ) -> Result<OperationResult<LandRecord>, ClientError>;

    /// Fetch the full land collection.
    async fn get_lands(&self) -> Result<Vec<LandRecord>, ClientError>;

    /// Greet by name.
    async fn greet(&self, name: &str) -> Result<String, ClientError>;

    /// Stable backend identifier (for pairing and logging).
    fn backend_id(&self) -> &str;
}

/// Session observer - outbound port.
///
/// Tracks the identity provider's lifecycle and exposes the current
/// identity as a single authoritative value.
pub trait SessionObserver: Send + Sync {
    /// The signed-in identity, or `None` when signed out.
    fn current_identity(&self) -> Option<Principal>;
}

/// Backend handle provider - outbound port.
///
/// Yields a ready-to-call handle only once the session has an identity
/// and transport construction has completed. Absence means "loading",
/// never an error.
pub trait BackendProvider: Send + Sync {
    /// Backend connection type this provider yields.
    type Backend: BackendConnection + 'static;

    /// The current handle, if ready.
    fn handle(&self) -> Option<Arc<Self::Backend>>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock backend with scriptable responses.
pub struct MockBackend {
    /// Backend identifier.
    pub id: String,
    /// Principal echoed by `whoami`.
    pub principal: Principal,
    user: RwLock<UserRecord>,
    lands: RwLock<Vec<LandRecord>>,
    register_user_result: RwLock<Option<OperationResult<UserRecord>>>,
    register_land_result: RwLock<Option<OperationResult<LandRecord>>>,
    should_fail: AtomicBool,
    whoami_calls: AtomicUsize,
    user_lookup_calls: AtomicUsize,
}

impl MockBackend {
    /// Create a mock backend echoing the given principal.
    pub fn for_principal(principal: Principal) -> Self {
        Self {
            id: "mock-backend-1".to_string(),
            principal,
            user: RwLock::new(UserRecord::empty()),
            lands: RwLock::new(Vec::new()),
            register_user_result: RwLock::new(None),
            register_land_result: RwLock::new(None),
            should_fail: AtomicBool::new(false),
            whoami_calls: AtomicUsize::new(0),
            user_lookup_calls: AtomicUsize::new(0),
        }
    }

    /// Replace the record returned by the user lookup.
    pub fn set_user(&self, user: UserRecord) {
        *self.user.write().expect("mock lock") = user;
    }

    /// Replace the land collection.
    pub fn set_lands(&self, lands: Vec<LandRecord>) {
        *self.lands.write().expect("mock lock") = lands;
    }

    /// Script the next `register_user` result.
    pub fn script_register_user(&self, result: OperationResult<UserRecord>) {
        *self.register_user_result.write().expect("mock lock") = Some(result);
    }

    /// Script the next `register_land` result.
    pub fn script_register_land(&self, result: OperationResult<LandRecord>) {
        *self.register_land_result.write().expect("mock lock") = Some(result);
    }

    /// Make every call fail at the transport level.
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// How many times `whoami` was invoked.
    pub fn whoami_calls(&self) -> usize {
        self.whoami_calls.load(Ordering::SeqCst)
    }

    /// How many times the user lookup was invoked.
    pub fn user_lookup_calls(&self) -> usize {
        self.user_lookup_calls.load(Ordering::SeqCst)
    }

    fn transport_check(&self) -> Result<(), ClientError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(ClientError::Transport("mock failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::for_principal(Principal::new("mock-principal-1"))
    }
}

#[async_trait]
impl BackendConnection for MockBackend {
    async fn whoami(&self) -> Result<Principal, ClientError> {
        self.whoami_calls.fetch_add(1, Ordering::SeqCst);
        self.transport_check()?;
        Ok(self.principal.clone())
    }

    async fn get_user_by_principal(&self) -> Result<UserRecord, ClientError> {
        self.user_lookup_calls.fetch_add(1, Ordering::SeqCst);
        self.transport_check()?;
        Ok(self.user.read().expect("mock lock").clone())
    }

    async fn register_user(&self, nik: Nat) -> Result<OperationResult<UserRecord>, ClientError> {
        self.transport_check()?;
        let scripted = self.register_user_result.write().expect("mock lock").take();
        let result = scripted.unwrap_or_else(|| {
            OperationResult::ok("Success", UserRecord::new(nik, self.principal.clone()))
        });
        if let Some(user) = result.payload.as_ref().filter(|_| result.is_success()) {
            *self.user.write().expect("mock lock") = user.clone();
        }
        Ok(result)
    }

    async fn register_land(
        &self,
        certificate_id: &str,
        price: Nat,
    ) -> Result<OperationResult<LandRecord>, ClientError> {
        self.transport_check()?;
        let scripted = self.register_land_result.write().expect("mock lock").take();
        let result = scripted.unwrap_or_else(|| {
            OperationResult::ok(
                "Success",
                LandRecord::new(certificate_id, price, self.principal.clone()),
            )
        });
        if let Some(land) = result.payload.as_ref().filter(|_| result.is_success()) {
            self.lands.write().expect("mock lock").push(land.clone());
        }
        Ok(result)
    }

    async fn get_lands(&self) -> Result<Vec<LandRecord>, ClientError> {
        self.transport_check()?;
        Ok(self.lands.read().expect("mock lock").clone())
    }

    async fn greet(&self, name: &str) -> Result<String, ClientError> {
        self.transport_check()?;
        Ok(format!("Hello, {name}!"))
    }

    fn backend_id(&self) -> &str {
        &self.id
    }
}

/// Mock session observer with a settable identity.
#[derive(Default)]
pub struct MockSession {
    identity: RwLock<Option<Principal>>,
}

impl MockSession {
    /// Create a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign an identity in.
    pub fn sign_in(&self, identity: Principal) {
        *self.identity.write().expect("mock lock") = Some(identity);
    }

    /// Sign out.
    pub fn sign_out(&self) {
        *self.identity.write().expect("mock lock") = None;
    }
}

impl SessionObserver for MockSession {
    fn current_identity(&self) -> Option<Principal> {
        self.identity.read().expect("mock lock").clone()
    }
}

/// Mock backend handle provider with a settable handle.
#[derive(Default)]
pub struct MockProvider {
    backend: RwLock<Option<Arc<MockBackend>>>,
}

impl MockProvider {
    /// Create a provider with no handle yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a handle available.
    pub fn set_backend(&self, backend: Arc<MockBackend>) {
        *self.backend.write().expect("mock lock") = Some(backend);
    }

    /// Drop the handle.
    pub fn clear_backend(&self) {
        *self.backend.write().expect("mock lock") = None;
    }
}

impl BackendProvider for MockProvider {
    type Backend = MockBackend;

    fn handle(&self) -> Option<Arc<MockBackend>> {
        self.backend.read().expect("mock lock").clone()
    }
}
