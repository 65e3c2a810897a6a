//! # Action Dispatcher
//!
//! One handler per user-triggered action. Each checks that the backend
//! handle is ready (absence is "loading", not an error), translates
//! text inputs, invokes the engine operation, and reports the terminal
//! display message. Transport failures propagate; everything else is an
//! outcome.

use crate::actions::input::parse_nat;
use crate::application::{StateSnapshot, SyncEngine};
use crate::domain::ClientError;
use crate::ports::{BackendProvider, SessionObserver, SessionSyncApi};
use tracing::{debug, warn};
use uuid::Uuid;

/// Terminal result of a dispatched action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The action ran; `message` is the display text to report, if any.
    Completed {
        /// Success or failure message for the presentation boundary.
        message: Option<String>,
    },
    /// The backend handle is not ready yet; the action was not invoked.
    NotReady,
    /// User input failed translation; the action was not invoked.
    Rejected {
        /// Human-readable reason.
        reason: String,
    },
}

impl DispatchOutcome {
    fn completed(message: Option<String>) -> Self {
        Self::Completed { message }
    }
}

/// Request handlers feeding user actions into the engine.
pub struct ActionDispatcher<S, P>
where
    S: SessionObserver,
    P: BackendProvider,
{
    engine: SyncEngine<S, P>,
}

impl<S, P> ActionDispatcher<S, P>
where
    S: SessionObserver,
    P: BackendProvider,
{
    /// Wrap an engine.
    pub fn new(engine: SyncEngine<S, P>) -> Self {
        Self { engine }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &SyncEngine<S, P> {
        &self.engine
    }

    /// The wrapped engine, mutably.
    pub fn engine_mut(&mut self) -> &mut SyncEngine<S, P> {
        &mut self.engine
    }

    /// Serialize the current state for the presentation boundary.
    pub fn snapshot(&self) -> StateSnapshot {
        self.engine.snapshot()
    }

    fn gate(&self, action: &str) -> bool {
        if !self.engine.backend_ready() {
            debug!(action, "Backend handle not ready; action deferred");
            return false;
        }
        let correlation_id = Uuid::new_v4();
        debug!(action, %correlation_id, "Dispatching action");
        true
    }

    /// Greet by name.
    pub async fn greet(&mut self, name: &str) -> Result<DispatchOutcome, ClientError> {
        if !self.gate("greet") {
            return Ok(DispatchOutcome::NotReady);
        }
        self.engine.greet(name).await?;
        Ok(DispatchOutcome::completed(
            self.engine.cache().greeting().map(str::to_string),
        ))
    }

    /// Register the current identity with a national identity number
    /// supplied as decimal text.
    pub async fn register_user(&mut self, nik: &str) -> Result<DispatchOutcome, ClientError> {
        if !self.gate("register_user") {
            return Ok(DispatchOutcome::NotReady);
        }
        let nik = match parse_nat("nik", nik) {
            Ok(nik) => nik,
            Err(err) => {
                warn!(%err, "Rejected registration input");
                return Ok(DispatchOutcome::Rejected {
                    reason: err.to_string(),
                });
            }
        };
        self.engine.register_user(nik).await?;
        Ok(DispatchOutcome::completed(
            self.engine.cache().message().map(str::to_string),
        ))
    }

    /// Refresh the user record for the current identity.
    pub async fn get_user(&mut self) -> Result<DispatchOutcome, ClientError> {
        if !self.gate("get_user") {
            return Ok(DispatchOutcome::NotReady);
        }
        self.engine.fetch_user_record().await?;
        Ok(DispatchOutcome::completed(None))
    }

    /// Register a land title from text inputs.
    pub async fn register_land(
        &mut self,
        certificate_id: &str,
        price: &str,
    ) -> Result<DispatchOutcome, ClientError> {
        if !self.gate("register_land") {
            return Ok(DispatchOutcome::NotReady);
        }
        let price = match parse_nat("price", price) {
            Ok(price) => price,
            Err(err) => {
                warn!(%err, "Rejected land registration input");
                return Ok(DispatchOutcome::Rejected {
                    reason: err.to_string(),
                });
            }
        };
        self.engine.register_land(certificate_id.trim(), price).await?;
        Ok(DispatchOutcome::completed(
            self.engine.cache().message().map(str::to_string),
        ))
    }

    /// Refresh the land collection.
    pub async fn get_lands(&mut self) -> Result<DispatchOutcome, ClientError> {
        if !self.gate("get_lands") {
            return Ok(DispatchOutcome::NotReady);
        }
        self.engine.fetch_lands().await?;
        Ok(DispatchOutcome::completed(None))
    }
}
