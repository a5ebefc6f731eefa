//! Session state, restore, and the three mutators.
//!
//! State is published through a `watch` channel so readers never block and can
//! await changes. Every mutation (restore included) runs under one async mutex,
//! so the store, the bearer header, and the in-memory pair always change together.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use super::gateway::AuthGateway;
use crate::error::{SessionError, StorageError};
use crate::storage::KeyValueStore;
use crate::types::{SignInCredentials, User, UserUpdate};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "@GoBarber:token";
/// Storage key of the JSON-encoded user.
pub const USER_KEY: &str = "@GoBarber:user";

// ─────────────────────────────────────────────
// State
// ─────────────────────────────────────────────

/// Token and user. Only ever present together.
#[derive(Clone, Debug, PartialEq, Eq)]
struct AuthState {
    token: String,
    user: User,
}

/// A snapshot of the session as seen by dependents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// True until the startup restore has finished reading the store.
    pub loading: bool,
    auth: Option<AuthState>,
}

impl SessionState {
    fn initial() -> Self {
        Self {
            loading: true,
            auth: None,
        }
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.auth.as_ref().map(|a| &a.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }
}

// ─────────────────────────────────────────────
// SessionManager
// ─────────────────────────────────────────────

/// Owns the authenticated session and is its only writer.
///
/// Share it as `Arc<SessionManager>`; dependents read [`user`](Self::user) and
/// [`is_loading`](Self::is_loading) and call [`sign_in`](Self::sign_in),
/// [`sign_out`](Self::sign_out), and [`update_user`](Self::update_user).
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    gateway: Arc<dyn AuthGateway>,
    state: watch::Sender<SessionState>,
    /// Serializes every mutation.
    writer: Mutex<()>,
    restore_started: AtomicBool,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SessionManager")
            .field("loading", &state.loading)
            .field("user_id", &state.user().map(|u| u.id.as_str()))
            .finish()
    }
}

impl SessionManager {
    /// Create an empty, still-loading manager. Call [`restore`](Self::restore) next.
    pub fn new(store: Arc<dyn KeyValueStore>, gateway: Arc<dyn AuthGateway>) -> Self {
        let (state, _) = watch::channel(SessionState::initial());
        Self {
            store,
            gateway,
            state,
            writer: Mutex::new(()),
            restore_started: AtomicBool::new(false),
        }
    }

    // ── Reads ──

    /// The signed-in user. Only meaningful once [`is_loading`](Self::is_loading) is false.
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receive every future state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Wait for the startup restore to finish, then return the signed-in user.
    pub async fn wait_until_loaded(&self) -> Option<User> {
        let mut rx = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let user = match rx.wait_for(|s| !s.loading).await {
            Ok(state) => state.user().cloned(),
            Err(_) => self.user(),
        };
        user
    }

    // ── Restore ──

    /// Repopulate the session from the store.
    ///
    /// Runs once per manager; later calls return immediately. `loading` turns
    /// false exactly once, after the store read resolves, whatever its outcome.
    pub async fn restore(&self) -> Result<(), SessionError> {
        if self.restore_started.swap(true, Ordering::SeqCst) {
            debug!("session restore already ran, skipping");
            return Ok(());
        }

        let _guard = self.writer.lock().await;

        let restored = match self.read_persisted().await {
            Ok(Some(auth)) => match self.gateway.set_bearer_token(Some(&auth.token)) {
                Ok(()) => Ok(Some(auth)),
                Err(e) => Err(SessionError::from(e)),
            },
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        };

        match restored {
            Ok(auth) => {
                match &auth {
                    Some(a) => info!(user_id = %a.user.id, "restored session from storage"),
                    None => debug!("no persisted session"),
                }
                self.state.send_modify(|s| {
                    s.auth = auth;
                    s.loading = false;
                });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to restore session");
                self.state.send_modify(|s| s.loading = false);
                Err(e)
            }
        }
    }

    /// Read both keys in one batch. Absent or empty entries mean "no session".
    async fn read_persisted(&self) -> Result<Option<AuthState>, SessionError> {
        let values = self.store.multi_get(&[TOKEN_KEY, USER_KEY]).await?;
        let mut values = values.into_iter().map(|v| v.filter(|s| !s.is_empty()));

        match (values.next().flatten(), values.next().flatten()) {
            (Some(token), Some(user_json)) => {
                let user: User =
                    serde_json::from_str(&user_json).map_err(SessionError::CorruptRecord)?;
                Ok(Some(AuthState { token, user }))
            }
            _ => Ok(None),
        }
    }

    // ── Mutations ──

    /// Exchange credentials for a session.
    ///
    /// On any failure the session, the store, and the bearer header are left
    /// exactly as they were.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, SessionError> {
        let _guard = self.writer.lock().await;

        let credentials = SignInCredentials::new(email, password);
        let response = self.gateway.create_session(&credentials).await?;
        response
            .validate()
            .map_err(SessionError::InvalidResponse)?;

        let user_json = serde_json::to_string(&response.user).map_err(StorageError::from)?;

        let previous_token = self.gateway.bearer_token();
        self.gateway.set_bearer_token(Some(&response.token))?;

        if let Err(e) = self
            .store
            .multi_set(&[(TOKEN_KEY, &response.token), (USER_KEY, &user_json)])
            .await
        {
            if let Err(header_err) = self.gateway.set_bearer_token(previous_token.as_deref()) {
                warn!(error = %header_err, "failed to roll back bearer header");
            }
            return Err(e.into());
        }

        info!(user_id = %response.user.id, "signed in");
        let user = response.user.clone();
        self.state.send_modify(|s| {
            s.auth = Some(AuthState {
                token: response.token,
                user: response.user,
            });
        });
        Ok(user)
    }

    /// Forget the session: storage pair, bearer header, and in-memory state.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        let _guard = self.writer.lock().await;

        self.store.multi_remove(&[TOKEN_KEY, USER_KEY]).await?;
        self.gateway.set_bearer_token(None)?;
        self.state.send_modify(|s| s.auth = None);

        info!("signed out");
        Ok(())
    }

    /// Merge `update` into the signed-in user and persist the merged record.
    ///
    /// The token is never touched. Pass the server's response after calling
    /// the API; this makes no network call itself.
    pub async fn update_user(&self, update: impl Into<UserUpdate>) -> Result<User, SessionError> {
        let update = update.into();
        let _guard = self.writer.lock().await;

        let current = self.user().ok_or(SessionError::NotAuthenticated)?;
        let merged = current.merged(&update);

        let user_json = serde_json::to_string(&merged).map_err(StorageError::from)?;
        self.store.set_item(USER_KEY, &user_json).await?;

        debug!(user_id = %merged.id, "updated user");
        self.state.send_modify(|s| {
            if let Some(auth) = s.auth.as_mut() {
                auth.user = merged.clone();
            }
        });
        Ok(merged)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::storage::MemoryStore;
    use crate::types::SessionResponse;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::Notify;

    // ── Test doubles ──

    struct StubGateway {
        token: String,
        user: User,
        fail: AtomicBool,
        delay: Option<Duration>,
        bearer: std::sync::Mutex<Option<String>>,
        calls: AtomicUsize,
    }

    impl StubGateway {
        fn new(token: &str, user: User) -> Self {
            Self {
                token: token.to_string(),
                user,
                fail: AtomicBool::new(false),
                delay: None,
                bearer: std::sync::Mutex::new(None),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(self) -> Self {
            self.fail.store(true, Ordering::SeqCst);
            self
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
    }

    #[async_trait]
    impl AuthGateway for StubGateway {
        async fn create_session(
            &self,
            _credentials: &SignInCredentials,
        ) -> Result<SessionResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(ApiError::Transport("connection refused".to_string()));
            }
            Ok(SessionResponse {
                token: self.token.clone(),
                user: self.user.clone(),
            })
        }

        fn set_bearer_token(&self, token: Option<&str>) -> Result<(), ApiError> {
            *self.bearer.lock().unwrap() = token.map(String::from);
            Ok(())
        }

        fn bearer_token(&self) -> Option<String> {
            self.bearer.lock().unwrap().clone()
        }
    }

    /// A store whose reads wait for a signal and whose writes can be made to fail.
    #[derive(Default)]
    struct ControlledStore {
        inner: MemoryStore,
        read_gate: Option<Arc<Notify>>,
        fail_writes: AtomicBool,
        reads: AtomicUsize,
    }

    #[async_trait]
    impl KeyValueStore for ControlledStore {
        async fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<String>>, StorageError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.read_gate {
                gate.notified().await;
            }
            self.inner.multi_get(keys).await
        }

        async fn multi_set(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(std::io::Error::other("disk full").into());
            }
            self.inner.multi_set(entries).await
        }

        async fn multi_remove(&self, keys: &[&str]) -> Result<(), StorageError> {
            self.inner.multi_remove(keys).await
        }
    }

    fn ana() -> User {
        User {
            id: "1".to_string(),
            name: "A".to_string(),
            email: "a@a".to_string(),
            avatar_url: None,
        }
    }

    fn bruno() -> User {
        User {
            id: "2".to_string(),
            name: "Bruno".to_string(),
            email: "bruno@gobarber.com".to_string(),
            avatar_url: Some("http://localhost:3333/files/b.jpg".to_string()),
        }
    }

    fn persisted(token: &str, user: &User) -> MemoryStore {
        MemoryStore::with_entries([
            (TOKEN_KEY.to_string(), token.to_string()),
            (USER_KEY.to_string(), serde_json::to_string(user).unwrap()),
        ])
    }

    async fn stored_pair(store: &dyn KeyValueStore) -> (Option<String>, Option<User>) {
        let values = store.multi_get(&[TOKEN_KEY, USER_KEY]).await.unwrap();
        let user = values[1]
            .as_deref()
            .map(|json| serde_json::from_str::<User>(json).unwrap());
        (values[0].clone(), user)
    }

    // ── Restore ──

    #[tokio::test]
    async fn test_new_manager_is_loading_and_empty() {
        let mgr = SessionManager::new(
            Arc::new(MemoryStore::new()),
            Arc::new(StubGateway::new("t", ana())),
        );
        assert!(mgr.is_loading());
        assert!(mgr.user().is_none());
    }

    #[tokio::test]
    async fn test_restore_populates_session_and_header() {
        let gateway = Arc::new(StubGateway::new("unused", ana()));
        let mgr = SessionManager::new(Arc::new(persisted("tok-1", &bruno())), gateway.clone());

        mgr.restore().await.unwrap();

        assert!(!mgr.is_loading());
        assert_eq!(mgr.user(), Some(bruno()));
        assert_eq!(gateway.bearer_token().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_restore_with_empty_store() {
        let gateway = Arc::new(StubGateway::new("unused", ana()));
        let mgr = SessionManager::new(Arc::new(MemoryStore::new()), gateway.clone());

        mgr.restore().await.unwrap();

        assert!(!mgr.is_loading());
        assert!(!mgr.is_authenticated());
        assert!(gateway.bearer_token().is_none());
    }

    #[tokio::test]
    async fn test_restore_with_only_token_stays_signed_out() {
        let store = MemoryStore::with_entries([(TOKEN_KEY, "tok")]);
        let mgr = SessionManager::new(Arc::new(store), Arc::new(StubGateway::new("t", ana())));

        mgr.restore().await.unwrap();
        assert!(mgr.user().is_none());
    }

    #[tokio::test]
    async fn test_restore_treats_empty_token_as_absent() {
        let store = MemoryStore::with_entries([
            (TOKEN_KEY.to_string(), String::new()),
            (USER_KEY.to_string(), serde_json::to_string(&ana()).unwrap()),
        ]);
        let mgr = SessionManager::new(Arc::new(store), Arc::new(StubGateway::new("t", ana())));

        mgr.restore().await.unwrap();
        assert!(!mgr.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_is_idempotent_across_managers() {
        let store: Arc<dyn KeyValueStore> = Arc::new(persisted("tok-1", &ana()));

        let first = SessionManager::new(store.clone(), Arc::new(StubGateway::new("x", bruno())));
        first.restore().await.unwrap();

        let second = SessionManager::new(store, Arc::new(StubGateway::new("x", bruno())));
        second.restore().await.unwrap();

        assert_eq!(first.snapshot(), second.snapshot());
        assert_eq!(second.user(), Some(ana()));
    }

    #[tokio::test]
    async fn test_corrupt_user_record_fails_but_finishes_loading() {
        let store = MemoryStore::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, "{not json")]);
        let mgr = SessionManager::new(Arc::new(store), Arc::new(StubGateway::new("t", ana())));

        let err = mgr.restore().await.unwrap_err();
        assert!(matches!(err, SessionError::CorruptRecord(_)));
        assert!(!mgr.is_loading());
        assert!(!mgr.is_authenticated());
    }

    #[tokio::test]
    async fn test_loading_flips_exactly_once() {
        let mgr = SessionManager::new(
            Arc::new(persisted("tok", &ana())),
            Arc::new(StubGateway::new("t", ana())),
        );
        let mut rx = mgr.subscribe();
        assert!(rx.borrow_and_update().loading);

        mgr.restore().await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().loading);

        // A second restore neither reads nor publishes anything
        mgr.restore().await.unwrap();
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_second_restore_does_not_read_store() {
        let store = Arc::new(ControlledStore::default());
        let mgr = SessionManager::new(store.clone(), Arc::new(StubGateway::new("t", ana())));

        mgr.restore().await.unwrap();
        mgr.restore().await.unwrap();
        assert_eq!(store.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_loading_stays_true_until_read_resolves() {
        let gate = Arc::new(Notify::new());
        let store = ControlledStore {
            read_gate: Some(gate.clone()),
            ..Default::default()
        };
        let mgr = Arc::new(SessionManager::new(
            Arc::new(store),
            Arc::new(StubGateway::new("t", ana())),
        ));

        let task = {
            let mgr = mgr.clone();
            tokio::spawn(async move { mgr.restore().await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(mgr.is_loading());

        gate.notify_one();
        task.await.unwrap().unwrap();
        assert!(!mgr.is_loading());
    }

    #[tokio::test]
    async fn test_wait_until_loaded_returns_restored_user() {
        let mgr = Arc::new(SessionManager::new(
            Arc::new(persisted("tok", &bruno())),
            Arc::new(StubGateway::new("t", ana())),
        ));

        let waiter = {
            let mgr = mgr.clone();
            tokio::spawn(async move { mgr.wait_until_loaded().await })
        };
        mgr.restore().await.unwrap();

        assert_eq!(waiter.await.unwrap(), Some(bruno()));
    }

    #[tokio::test]
    async fn test_wait_until_loaded_after_restore_returns_immediately() {
        let mgr = SessionManager::new(
            Arc::new(MemoryStore::new()),
            Arc::new(StubGateway::new("t", ana())),
        );
        mgr.restore().await.unwrap();

        let user = tokio::time::timeout(Duration::from_secs(1), mgr.wait_until_loaded())
            .await
            .unwrap();
        assert_eq!(user, None);

        mgr.sign_in("ana@gobarber.com", "123456").await.unwrap();
        assert_eq!(mgr.wait_until_loaded().await, Some(ana()));
    }

    // ── Sign in ──

    #[tokio::test]
    async fn test_sign_in_persists_pair_and_sets_header() {
        let store = Arc::new(MemoryStore::new());
        let gateway = Arc::new(StubGateway::new("tok-ana", ana()));
        let mgr = SessionManager::new(store.clone(), gateway.clone());
        mgr.restore().await.unwrap();

        let user = mgr.sign_in("a@a", "123456").await.unwrap();

        assert_eq!(user, ana());
        assert_eq!(mgr.user(), Some(ana()));
        assert_eq!(gateway.bearer_token().as_deref(), Some("tok-ana"));
        let (token, stored_user) = stored_pair(store.as_ref()).await;
        assert_eq!(token.as_deref(), Some("tok-ana"));
        assert_eq!(stored_user, Some(ana()));
    }

    #[tokio::test]
    async fn test_sign_in_failure_leaves_state_untouched() {
        let store = Arc::new(persisted("tok-bruno", &bruno()));
        let gateway = Arc::new(StubGateway::new("tok-ana", ana()).failing());
        let mgr = SessionManager::new(store.clone(), gateway.clone());
        mgr.restore().await.unwrap();
        let before = mgr.snapshot();

        let err = mgr.sign_in("a@a", "wrong").await.unwrap_err();

        assert!(matches!(err, SessionError::Api(ApiError::Transport(_))));
        assert_eq!(mgr.snapshot(), before);
        assert_eq!(gateway.bearer_token().as_deref(), Some("tok-bruno"));
        let (token, user) = stored_pair(store.as_ref()).await;
        assert_eq!(token.as_deref(), Some("tok-bruno"));
        assert_eq!(user, Some(bruno()));
    }

    #[tokio::test]
    async fn test_sign_in_rejects_invalid_response() {
        let store = Arc::new(MemoryStore::new());
        let gateway = Arc::new(StubGateway::new("", ana()));
        let mgr = SessionManager::new(store.clone(), gateway.clone());
        mgr.restore().await.unwrap();

        let err = mgr.sign_in("a@a", "123456").await.unwrap_err();

        assert!(matches!(err, SessionError::InvalidResponse(_)));
        assert!(!mgr.is_authenticated());
        assert!(gateway.bearer_token().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_sign_in_storage_failure_rolls_back_header() {
        let store = ControlledStore::default();
        store.fail_writes.store(true, Ordering::SeqCst);
        let gateway = Arc::new(StubGateway::new("tok-ana", ana()));
        let mgr = SessionManager::new(Arc::new(store), gateway.clone());
        mgr.restore().await.unwrap();

        let err = mgr.sign_in("a@a", "123456").await.unwrap_err();

        assert!(matches!(err, SessionError::Storage(StorageError::Io(_))));
        assert!(!mgr.is_authenticated());
        assert!(gateway.bearer_token().is_none());
    }

    // ── Sign out ──

    #[tokio::test]
    async fn test_sign_out_clears_everything() {
        let store = Arc::new(persisted("tok", &ana()));
        let gateway = Arc::new(StubGateway::new("t", ana()));
        let mgr = SessionManager::new(store.clone(), gateway.clone());
        mgr.restore().await.unwrap();
        assert!(mgr.is_authenticated());

        mgr.sign_out().await.unwrap();

        assert!(!mgr.is_authenticated());
        assert!(gateway.bearer_token().is_none());
        assert_eq!(stored_pair(store.as_ref()).await, (None, None));
    }

    #[tokio::test]
    async fn test_sign_out_when_signed_out_is_ok() {
        let mgr = SessionManager::new(
            Arc::new(MemoryStore::new()),
            Arc::new(StubGateway::new("t", ana())),
        );
        mgr.restore().await.unwrap();
        mgr.sign_out().await.unwrap();
        assert!(mgr.user().is_none());
    }

    // ── Update user ──

    #[tokio::test]
    async fn test_update_user_merges_and_keeps_token() {
        let store = Arc::new(persisted("tok-ana", &ana()));
        let gateway = Arc::new(StubGateway::new("t", ana()));
        let mgr = SessionManager::new(store.clone(), gateway.clone());
        mgr.restore().await.unwrap();

        let updated = mgr.update_user(UserUpdate::name("X")).await.unwrap();

        let expected = User {
            name: "X".to_string(),
            ..ana()
        };
        assert_eq!(updated, expected);
        assert_eq!(mgr.user(), Some(expected.clone()));
        assert_eq!(gateway.bearer_token().as_deref(), Some("tok-ana"));

        // Persisted copy matches the merged in-memory copy
        let (token, stored_user) = stored_pair(store.as_ref()).await;
        assert_eq!(token.as_deref(), Some("tok-ana"));
        assert_eq!(stored_user, Some(expected));
    }

    #[tokio::test]
    async fn test_update_user_with_full_record() {
        let mgr = SessionManager::new(
            Arc::new(persisted("tok", &ana())),
            Arc::new(StubGateway::new("t", ana())),
        );
        mgr.restore().await.unwrap();

        let server_user = User {
            avatar_url: Some("http://localhost:3333/files/new.jpg".to_string()),
            ..ana()
        };
        let updated = mgr.update_user(server_user.clone()).await.unwrap();
        assert_eq!(updated, server_user);
    }

    #[tokio::test]
    async fn test_update_user_requires_session() {
        let store = Arc::new(MemoryStore::new());
        let mgr = SessionManager::new(store.clone(), Arc::new(StubGateway::new("t", ana())));
        mgr.restore().await.unwrap();

        let err = mgr.update_user(UserUpdate::name("X")).await.unwrap_err();
        assert!(matches!(err, SessionError::NotAuthenticated));
        assert!(store.is_empty().await);
    }

    // ── Concurrency ──

    #[tokio::test]
    async fn test_concurrent_sign_in_and_sign_out_stay_consistent() {
        for _ in 0..10 {
            let store = Arc::new(MemoryStore::new());
            let gateway = Arc::new(
                StubGateway::new("tok-ana", ana()).with_delay(Duration::from_millis(5)),
            );
            let mgr = Arc::new(SessionManager::new(store.clone(), gateway.clone()));
            mgr.restore().await.unwrap();

            let a = {
                let mgr = mgr.clone();
                tokio::spawn(async move { mgr.sign_in("a@a", "123456").await.map(|_| ()) })
            };
            let b = {
                let mgr = mgr.clone();
                tokio::spawn(async move { mgr.sign_out().await })
            };
            a.await.unwrap().unwrap();
            b.await.unwrap().unwrap();

            let (token, user) = stored_pair(store.as_ref()).await;
            assert_eq!(token.is_some(), user.is_some());
            assert_eq!(mgr.is_authenticated(), token.is_some());
            assert_eq!(gateway.bearer_token(), token);
        }
    }
}
