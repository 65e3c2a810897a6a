//! # Synchronization Engine
//!
//! Application service orchestrating session-bound record
//! synchronization against the registry backend.
//!
//! The engine owns every piece of session-scoped state explicitly and
//! funnels all transitions through named operations. Authorization is
//! derived, never stored. Each async operation captures the session
//! epoch before its round trip and applies the response through an
//! epoch-checked `apply_*` method, so a response that arrives after the
//! identity changed is discarded instead of leaking into the new
//! session.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::snapshot::{render_json, StateSnapshot};
use crate::config::ClientConfig;
use crate::domain::{
    derive_authorization, AuthorizationState, ClientError, RecordCache, SessionEpoch,
    LAND_REGISTRATION_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE,
};
use crate::ports::{BackendConnection, BackendProvider, SessionObserver, SessionSyncApi};
use titlechain_types::{LandRecord, Nat, OperationResult, Principal, UserRecord, STATUS_OK};

/// Synchronization engine - decides what the user is authorized to do
/// next and keeps cached records consistent with server state.
pub struct SyncEngine<S, P>
where
    S: SessionObserver,
    P: BackendProvider,
{
    /// Configuration.
    config: ClientConfig,
    /// Identity source.
    session: Arc<S>,
    /// Backend handle source.
    provider: Arc<P>,
    /// Current session generation.
    epoch: SessionEpoch,
    /// Identity seen by the last evaluation.
    last_identity: Option<Principal>,
    /// Principal text echoed by the backend.
    principal_text: Option<String>,
    /// (identity, backend id) pair the principal was resolved for.
    resolved_for: Option<(Principal, String)>,
    /// Has the user record been fetched for this session?
    user_fetched: bool,
    /// Session-scoped record cache.
    cache: RecordCache,
}

impl<S, P> SyncEngine<S, P>
where
    S: SessionObserver,
    P: BackendProvider,
{
    /// Create a new engine over the given session and provider.
    pub fn new(config: ClientConfig, session: Arc<S>, provider: Arc<P>) -> Self {
        Self {
            config,
            session,
            provider,
            epoch: SessionEpoch::initial(),
            last_identity: None,
            principal_text: None,
            resolved_for: None,
            user_fetched: false,
            cache: RecordCache::new(),
        }
    }

    /// Current session epoch.
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    /// The session-scoped record cache.
    pub fn cache(&self) -> &RecordCache {
        &self.cache
    }

    /// Is a backend handle available right now?
    pub fn backend_ready(&self) -> bool {
        self.provider.handle().is_some()
    }

    /// Resolved principal text, if any.
    pub fn principal_text(&self) -> Option<&str> {
        self.principal_text.as_deref()
    }

    /// Record an identity change: bump the epoch and drop every piece
    /// of state belonging to the previous session.
    pub fn on_identity_changed(&mut self, identity: Option<Principal>) {
        self.epoch = self.epoch.next();
        self.cache.clear();
        self.principal_text = None;
        self.resolved_for = None;
        self.user_fetched = false;
        match &identity {
            Some(id) => info!(
                epoch = self.epoch.value(),
                identity = %id,
                "Session identity changed"
            ),
            None => info!(
                epoch = self.epoch.value(),
                "Session signed out; cached records cleared"
            ),
        }
        self.last_identity = identity;
    }

    /// Read the observer, folding any identity change into the engine.
    fn observe_session(&mut self) -> Option<Principal> {
        let current = self.session.current_identity();
        if current != self.last_identity {
            self.on_identity_changed(current.clone());
        }
        current
    }

    /// Identity and backend handle, or the reason one is missing.
    fn ready_backend(
        &mut self,
    ) -> Result<(Principal, Arc<P::Backend>, SessionEpoch), ClientError> {
        let identity = self
            .observe_session()
            .ok_or(ClientError::NotAuthenticated)?;
        let backend = self.provider.handle().ok_or(ClientError::BackendNotReady)?;
        Ok((identity, backend, self.epoch))
    }

    /// Does a response issued under `epoch` still belong to this
    /// session?
    fn is_current(&self, epoch: SessionEpoch, operation: &str) -> bool {
        if epoch == self.epoch {
            return true;
        }
        debug!(
            issued = epoch.value(),
            current = self.epoch.value(),
            operation,
            "Discarding response from a previous session"
        );
        false
    }

    /// Apply a fetched user record, replacing the cached one wholesale.
    pub fn apply_user_record(&mut self, epoch: SessionEpoch, user: UserRecord) {
        if !self.is_current(epoch, "user lookup") {
            return;
        }
        debug!(empty = user.is_empty(), "Stored fetched user record");
        self.cache.user = Some(user);
        self.user_fetched = true;
    }

    /// Apply a user registration result.
    pub fn apply_user_registration(
        &mut self,
        epoch: SessionEpoch,
        result: OperationResult<UserRecord>,
    ) {
        if !self.is_current(epoch, "user registration") {
            return;
        }
        match result.payload {
            Some(user) if result.code == STATUS_OK => {
                info!(principal = %user.principal, "User registration succeeded");
                self.cache.user = Some(user);
                self.cache.message = Some(result.message);
                self.user_fetched = true;
            }
            _ => {
                warn!(code = result.code, "User registration rejected");
                self.cache.message = Some(REGISTRATION_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Apply a land registration result.
    pub fn apply_land_registration(
        &mut self,
        epoch: SessionEpoch,
        result: OperationResult<LandRecord>,
    ) {
        if !self.is_current(epoch, "land registration") {
            return;
        }
        match result.payload {
            Some(land) if result.code == STATUS_OK => {
                info!(certificate_id = %land.certificate_id, "Land registration succeeded");
                self.cache.last_registered = Some(land);
                self.cache.message = Some(result.message);
            }
            _ => {
                warn!(code = result.code, "Land registration rejected");
                self.cache.message = Some(LAND_REGISTRATION_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Apply a fetched land collection, replacing the cached one
    /// wholesale.
    pub fn apply_lands(&mut self, epoch: SessionEpoch, lands: Vec<LandRecord>) {
        if !self.is_current(epoch, "land query") {
            return;
        }
        debug!(count = lands.len(), "Stored fetched land collection");
        self.cache.lands = Some(lands);
    }

    /// Apply a greeting.
    pub fn apply_greeting(&mut self, epoch: SessionEpoch, greeting: String) {
        if !self.is_current(epoch, "greeting") {
            return;
        }
        self.cache.greeting = Some(greeting);
    }

    /// Resolve the principal once per (identity, backend) pair.
    async fn resolve_with(
        &mut self,
        identity: Principal,
        backend: Arc<P::Backend>,
    ) -> Result<(), ClientError> {
        let pair = (identity, backend.backend_id().to_string());
        if self.resolved_for.as_ref() == Some(&pair) {
            return Ok(());
        }
        let epoch = self.epoch;
        let principal = backend.whoami().await?;
        if !self.is_current(epoch, "principal resolution") {
            return Ok(());
        }
        debug!(principal = %principal, backend = %pair.1, "Resolved principal");
        self.principal_text = Some(principal.to_string());
        self.resolved_for = Some(pair);
        Ok(())
    }

    /// Fetch and apply the user record.
    async fn fetch_user_with(&mut self, backend: Arc<P::Backend>) -> Result<(), ClientError> {
        let epoch = self.epoch;
        let user = backend.get_user_by_principal().await?;
        self.apply_user_record(epoch, user);
        Ok(())
    }
}

#[async_trait]
impl<S, P> SessionSyncApi for SyncEngine<S, P>
where
    S: SessionObserver,
    P: BackendProvider,
{
    async fn synchronize(&mut self) -> Result<AuthorizationState, ClientError> {
        let Some(identity) = self.observe_session() else {
            return Ok(AuthorizationState::Unauthenticated);
        };
        let Some(backend) = self.provider.handle() else {
            return Ok(AuthorizationState::AwaitingBackend);
        };

        self.resolve_with(identity, Arc::clone(&backend)).await?;
        if self.config.auto_fetch_user && !self.user_fetched {
            self.fetch_user_with(backend).await?;
        }
        Ok(self.authorization_state())
    }

    async fn resolve_principal(&mut self) -> Result<(), ClientError> {
        let (identity, backend, _) = self.ready_backend()?;
        self.resolve_with(identity, backend).await
    }

    async fn fetch_user_record(&mut self) -> Result<(), ClientError> {
        let (_, backend, _) = self.ready_backend()?;
        self.fetch_user_with(backend).await
    }

    async fn register_user(&mut self, nik: Nat) -> Result<(), ClientError> {
        let (_, backend, epoch) = self.ready_backend()?;
        let result = backend.register_user(nik).await?;
        self.apply_user_registration(epoch, result);
        Ok(())
    }

    async fn register_land(
        &mut self,
        certificate_id: &str,
        price: Nat,
    ) -> Result<(), ClientError> {
        let (_, backend, epoch) = self.ready_backend()?;
        let result = backend.register_land(certificate_id, price).await?;
        self.apply_land_registration(epoch, result);
        Ok(())
    }

    async fn fetch_lands(&mut self) -> Result<(), ClientError> {
        let (_, backend, epoch) = self.ready_backend()?;
        let lands = backend.get_lands().await?;
        self.apply_lands(epoch, lands);
        Ok(())
    }

    async fn greet(&mut self, name: &str) -> Result<(), ClientError> {
        let (_, backend, epoch) = self.ready_backend()?;
        let greeting = backend.greet(name).await?;
        self.apply_greeting(epoch, greeting);
        Ok(())
    }

    fn authorization_state(&self) -> AuthorizationState {
        let identity = self.session.current_identity();
        derive_authorization(
            identity.as_ref(),
            self.provider.handle().is_some(),
            self.cache.user.as_ref(),
        )
    }

    fn snapshot(&self) -> StateSnapshot {
        let state = self.authorization_state();
        let principal = if state == AuthorizationState::Unauthenticated {
            Some(self.config.anonymous_principal.to_string())
        } else {
            self.principal_text.clone()
        };
        StateSnapshot {
            state,
            principal,
            user: self.cache.user.as_ref().and_then(render_json),
            land: self.cache.last_registered.as_ref().and_then(render_json),
            lands: self.cache.lands.as_ref().and_then(render_json),
            message: self.cache.message.clone(),
            greeting: self.cache.greeting.clone(),
        }
    }
}
