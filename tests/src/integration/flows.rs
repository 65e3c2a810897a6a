//! # Integration Test Flows
//!
//! Exercises the synchronization engine, the action dispatchers, and
//! the in-memory ledger adapters together: sign-in drives the engine
//! from `Unauthenticated` through `AwaitingBackend` to
//! `Unregistered`/`Registered`, actions mutate the record cache, and
//! sign-out invalidates everything, including responses still in
//! flight.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use titlechain_client::adapters::{InMemoryLedger, LedgerProvider, SharedSession};
    use titlechain_client::{
        ActionDispatcher, AuthorizationState, ClientConfig, DispatchOutcome, SessionSyncApi,
        SyncEngine,
    };
    use titlechain_types::{Nat, OperationResult, Principal, UserRecord};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct World {
        session: Arc<SharedSession>,
        provider: Arc<LedgerProvider>,
        dispatcher: ActionDispatcher<SharedSession, LedgerProvider>,
    }

    /// Wire a fresh engine + dispatcher over an in-memory ledger.
    fn create_world() -> World {
        let session = Arc::new(SharedSession::new());
        let ledger = Arc::new(InMemoryLedger::new());
        let provider = Arc::new(LedgerProvider::new(Arc::clone(&session), ledger));
        let engine = SyncEngine::new(
            ClientConfig::default(),
            Arc::clone(&session),
            Arc::clone(&provider),
        );
        World {
            session,
            provider,
            dispatcher: ActionDispatcher::new(engine),
        }
    }

    fn identity() -> Principal {
        Principal::new("w7x7r-cok77-xa")
    }

    // =============================================================================
    // INTEGRATION TESTS: SESSION LIFECYCLE
    // =============================================================================

    /// Full happy path: sign in, wait for the backend, find no record,
    /// register, end up registered.
    #[tokio::test]
    async fn test_signin_register_becomes_registered() {
        let mut world = create_world();

        // Signed out: nothing to do.
        let engine = world.dispatcher.engine_mut();
        assert_eq!(
            engine.synchronize().await.unwrap(),
            AuthorizationState::Unauthenticated
        );

        // Signed in, transport still under construction.
        world.session.sign_in(identity());
        let engine = world.dispatcher.engine_mut();
        assert_eq!(
            engine.synchronize().await.unwrap(),
            AuthorizationState::AwaitingBackend
        );

        // Backend ready: the empty record means unregistered.
        world.provider.connect();
        let engine = world.dispatcher.engine_mut();
        assert_eq!(
            engine.synchronize().await.unwrap(),
            AuthorizationState::Unregistered
        );

        // Register and re-derive.
        let outcome = world
            .dispatcher
            .register_user("1234567890123")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Completed {
                message: Some("Success".to_string())
            }
        );
        let snapshot = world.dispatcher.snapshot();
        assert_eq!(snapshot.state, AuthorizationState::Registered);
        assert!(snapshot.user.unwrap().contains("\"1234567890123\""));
        assert_eq!(snapshot.principal.as_deref(), Some("w7x7r-cok77-xa"));
    }

    /// A rejected registration shows the fixed failure message and
    /// leaves the session unregistered.
    #[tokio::test]
    async fn test_rejected_registration_stays_unregistered() {
        let mut world = create_world();
        world.session.sign_in(identity());
        world.provider.connect();
        world.dispatcher.engine_mut().synchronize().await.unwrap();

        // Zero nik is rejected by the ledger with code 400.
        let outcome = world.dispatcher.register_user("0").await.unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Completed {
                message: Some("Registration failed".to_string())
            }
        );
        assert_eq!(
            world.dispatcher.snapshot().state,
            AuthorizationState::Unregistered
        );
    }

    /// Registering twice is rejected by the ledger but never corrupts
    /// the cached record from the first registration.
    #[tokio::test]
    async fn test_duplicate_registration_preserves_record() {
        let mut world = create_world();
        world.session.sign_in(identity());
        world.provider.connect();
        world.dispatcher.engine_mut().synchronize().await.unwrap();

        world.dispatcher.register_user("111").await.unwrap();
        let outcome = world.dispatcher.register_user("222").await.unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Completed {
                message: Some("Registration failed".to_string())
            }
        );
        // Still registered under the first nik.
        let snapshot = world.dispatcher.snapshot();
        assert_eq!(snapshot.state, AuthorizationState::Registered);
        assert!(snapshot.user.unwrap().contains("\"111\""));
    }

    // =============================================================================
    // INTEGRATION TESTS: LAND ASSETS
    // =============================================================================

    /// Registered land shows up in the next collection query.
    #[tokio::test]
    async fn test_land_registration_round_trip() {
        let mut world = create_world();
        world.session.sign_in(identity());
        world.provider.connect();
        world.dispatcher.engine_mut().synchronize().await.unwrap();
        world.dispatcher.register_user("123").await.unwrap();

        let outcome = world
            .dispatcher
            .register_land("CERT-1", "1000")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Completed {
                message: Some("Success".to_string())
            }
        );

        world.dispatcher.get_lands().await.unwrap();
        let lands = world.dispatcher.snapshot().lands.unwrap();
        assert!(lands.contains("\"CERT-1\""));
        assert!(lands.contains("\"1000\""));
    }

    /// Land actions are available but rejected while unregistered, and
    /// never change the authorization state.
    #[tokio::test]
    async fn test_unregistered_land_registration_fails() {
        let mut world = create_world();
        world.session.sign_in(identity());
        world.provider.connect();
        world.dispatcher.engine_mut().synchronize().await.unwrap();

        let outcome = world
            .dispatcher
            .register_land("CERT-1", "1000")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Completed {
                message: Some("Land registration failed".to_string())
            }
        );
        assert_eq!(
            world.dispatcher.snapshot().state,
            AuthorizationState::Unregistered
        );
    }

    // =============================================================================
    // INTEGRATION TESTS: SESSION CHANGE AS CANCELLATION BOUNDARY
    // =============================================================================

    /// A lookup response that lands after sign-out is discarded; the
    /// signed-out session keeps an empty cache.
    #[tokio::test]
    async fn test_late_lookup_response_discarded_after_signout() {
        let mut world = create_world();
        world.session.sign_in(identity());
        world.provider.connect();
        world.dispatcher.engine_mut().synchronize().await.unwrap();
        world.dispatcher.register_user("123").await.unwrap();

        // The response below was issued under this epoch.
        let issued = world.dispatcher.engine().epoch();
        let late_record = UserRecord::new(Nat::from(123u64), identity());

        world.session.sign_out();
        world.provider.disconnect();
        let engine = world.dispatcher.engine_mut();
        assert_eq!(
            engine.synchronize().await.unwrap(),
            AuthorizationState::Unauthenticated
        );

        engine.apply_user_record(issued, late_record);
        assert!(engine.cache().is_empty());
        assert_eq!(
            engine.authorization_state(),
            AuthorizationState::Unauthenticated
        );
    }

    /// Same boundary for mutating results: a late registration success
    /// cannot leak into the next session.
    #[tokio::test]
    async fn test_late_registration_result_discarded_across_sessions() {
        let mut world = create_world();
        world.session.sign_in(identity());
        world.provider.connect();
        world.dispatcher.engine_mut().synchronize().await.unwrap();
        let issued = world.dispatcher.engine().epoch();

        // Switch straight to a different identity.
        world.session.sign_in(Principal::new("aaaaa-aa"));
        let engine = world.dispatcher.engine_mut();
        engine.synchronize().await.unwrap();

        engine.apply_user_registration(
            issued,
            OperationResult::ok("Success", UserRecord::new(Nat::from(9u64), identity())),
        );
        // The new session still has only its own (empty) record.
        assert_eq!(
            engine.authorization_state(),
            AuthorizationState::Unregistered
        );
        assert!(engine.cache().message().is_none());
    }

    /// Signing back in starts from a clean slate and a fresh principal
    /// resolution.
    #[tokio::test]
    async fn test_new_session_starts_clean() {
        let mut world = create_world();
        world.session.sign_in(identity());
        world.provider.connect();
        world.dispatcher.engine_mut().synchronize().await.unwrap();
        world.dispatcher.register_user("123").await.unwrap();
        world.dispatcher.register_land("CERT-1", "10").await.unwrap();

        world.session.sign_out();
        world.provider.disconnect();
        world.dispatcher.engine_mut().synchronize().await.unwrap();

        // A different identity signs in against the same ledger.
        world.session.sign_in(Principal::new("aaaaa-aa"));
        world.provider.connect();
        let state = world.dispatcher.engine_mut().synchronize().await.unwrap();
        assert_eq!(state, AuthorizationState::Unregistered);

        let snapshot = world.dispatcher.snapshot();
        assert_eq!(snapshot.principal.as_deref(), Some("aaaaa-aa"));
        assert!(snapshot.land.is_none());
        assert!(snapshot.message.is_none());
        // The first user's land is still in the registry, visible once
        // queried.
        world.dispatcher.get_lands().await.unwrap();
        let lands = world.dispatcher.snapshot().lands.unwrap();
        assert!(lands.contains("CERT-1"));
    }

    // =============================================================================
    // INTEGRATION TESTS: DISPATCH GATING
    // =============================================================================

    /// Actions are deferred, not failed, while the handle is absent.
    #[tokio::test]
    async fn test_actions_deferred_while_loading() {
        let mut world = create_world();
        world.session.sign_in(identity());
        // Transport never connected.
        assert_eq!(
            world.dispatcher.register_user("123").await.unwrap(),
            DispatchOutcome::NotReady
        );
        assert_eq!(
            world.dispatcher.greet("Alice").await.unwrap(),
            DispatchOutcome::NotReady
        );
        assert_eq!(
            world.dispatcher.engine_mut().synchronize().await.unwrap(),
            AuthorizationState::AwaitingBackend
        );
    }

    /// Greeting round trip through the dispatcher.
    #[tokio::test]
    async fn test_greet_round_trip() {
        let mut world = create_world();
        world.session.sign_in(identity());
        world.provider.connect();

        let outcome = world.dispatcher.greet("Alice").await.unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Completed {
                message: Some("Hello, Alice!".to_string())
            }
        );
        assert_eq!(
            world.dispatcher.snapshot().greeting.as_deref(),
            Some("Hello, Alice!")
        );
    }
}
