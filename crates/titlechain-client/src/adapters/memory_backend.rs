//! # In-Memory Registry Backend
//!
//! Reference implementation of the `BackendConnection` port against an
//! in-memory ledger. Carries the registry semantics the remote service
//! exposes: one user record per principal, land titles owned by
//! registered users, wholesale collection queries.

use crate::adapters::session::SharedSession;
use crate::domain::ClientError;
use crate::ports::{BackendConnection, BackendProvider, SessionObserver};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use titlechain_types::{LandRecord, Nat, OperationResult, Principal, UserRecord};

/// Stable identifier of the in-memory backend.
const BACKEND_ID: &str = "inmem-ledger-1";

/// Shared registry state: user records keyed by principal text plus the
/// land collection.
#[derive(Default)]
pub struct InMemoryLedger {
    users: RwLock<HashMap<String, UserRecord>>,
    lands: RwLock<Vec<LandRecord>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    fn user_for(&self, caller: &Principal) -> Result<UserRecord, ClientError> {
        let users = self.users.read().map_err(|_| ClientError::LockPoisoned)?;
        Ok(users
            .get(caller.as_text())
            .cloned()
            .unwrap_or_else(UserRecord::empty))
    }

    fn register_user(
        &self,
        caller: &Principal,
        nik: Nat,
    ) -> Result<OperationResult<UserRecord>, ClientError> {
        if nik.is_zero() {
            return Ok(OperationResult::rejected(400, "Invalid NIK"));
        }
        let mut users = self.users.write().map_err(|_| ClientError::LockPoisoned)?;
        if users.contains_key(caller.as_text()) {
            return Ok(OperationResult::rejected(409, "User already registered"));
        }
        let record = UserRecord::new(nik, caller.clone());
        users.insert(caller.as_text().to_string(), record.clone());
        Ok(OperationResult::ok("Success", record))
    }

    fn register_land(
        &self,
        caller: &Principal,
        certificate_id: &str,
        price: Nat,
    ) -> Result<OperationResult<LandRecord>, ClientError> {
        if certificate_id.is_empty() {
            return Ok(OperationResult::rejected(400, "Invalid certificate id"));
        }
        if !self.user_for(caller)?.references(caller) {
            return Ok(OperationResult::rejected(403, "User not registered"));
        }
        let record = LandRecord::new(certificate_id, price, caller.clone());
        let mut lands = self.lands.write().map_err(|_| ClientError::LockPoisoned)?;
        lands.push(record.clone());
        Ok(OperationResult::ok("Success", record))
    }

    fn all_lands(&self) -> Result<Vec<LandRecord>, ClientError> {
        let lands = self.lands.read().map_err(|_| ClientError::LockPoisoned)?;
        Ok(lands.clone())
    }
}

/// A backend connection bound to one calling identity.
pub struct InMemoryBackend {
    caller: Principal,
    ledger: Arc<InMemoryLedger>,
}

impl InMemoryBackend {
    /// Bind a connection to the given caller.
    pub fn new(caller: Principal, ledger: Arc<InMemoryLedger>) -> Self {
        Self { caller, ledger }
    }
}

#[async_trait]
impl BackendConnection for InMemoryBackend {
    async fn whoami(&self) -> Result<Principal, ClientError> {
        Ok(self.caller.clone())
    }

    async fn get_user_by_principal(&self) -> Result<UserRecord, ClientError> {
        self.ledger.user_for(&self.caller)
    }

    async fn register_user(&self, nik: Nat) -> Result<OperationResult<UserRecord>, ClientError> {
        self.ledger.register_user(&self.caller, nik)
    }

    async fn register_land(
        &self,
        certificate_id: &str,
        price: Nat,
    ) -> Result<OperationResult<LandRecord>, ClientError> {
        self.ledger.register_land(&self.caller, certificate_id, price)
    }

    async fn get_lands(&self) -> Result<Vec<LandRecord>, ClientError> {
        self.ledger.all_lands()
    }

    async fn greet(&self, name: &str) -> Result<String, ClientError> {
        Ok(format!("Hello, {name}!"))
    }

    fn backend_id(&self) -> &str {
        BACKEND_ID
    }
}

/// Backend handle provider over the in-memory ledger.
///
/// A handle exists only while the session has an identity and the
/// transport toggle is connected; otherwise callers see "loading".
pub struct LedgerProvider {
    session: Arc<SharedSession>,
    ledger: Arc<InMemoryLedger>,
    connected: AtomicBool,
}

impl LedgerProvider {
    /// Create a provider; transport starts disconnected.
    pub fn new(session: Arc<SharedSession>, ledger: Arc<InMemoryLedger>) -> Self {
        Self {
            session,
            ledger,
            connected: AtomicBool::new(false),
        }
    }

    /// Mark transport construction complete.
    pub fn connect(&self) {
        self.connected.store(true, Ordering::SeqCst);
    }

    /// Drop the transport.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }
}

impl BackendProvider for LedgerProvider {
    type Backend = InMemoryBackend;

    fn handle(&self) -> Option<Arc<InMemoryBackend>> {
        if !self.connected.load(Ordering::SeqCst) {
            return None;
        }
        let identity = self.session.current_identity()?;
        Some(Arc::new(InMemoryBackend::new(
            identity,
            Arc::clone(&self.ledger),
        )))
    }
}
