//! Authentication Session Controller
//!
//! Owns the session record and mirrors its persisted fields to the store.
//! Store failures are logged and swallowed: a failed read counts as an
//! absent value, a failed write or remove never blocks the transition.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::sync::watch;

use jobcrew_storage::{keys, KeyValueStore};

use crate::session::{AuthState, Session, ThemeMode, UserRecord};
use crate::transition::{reduce, Transition};

/// Cloneable handle passed to every screen that needs the session.
pub struct AuthController {
    store: Arc<dyn KeyValueStore>,
    /// Serializes transitions, I/O included
    transition_lock: Arc<Mutex<()>>,
    session: Arc<watch::Sender<Session>>,
    theme: Arc<RwLock<ThemeMode>>,
}

impl AuthController {
    /// Start in `Restoring`; call [`restore`](Self::restore) once at launch.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let (session, _) = watch::channel(Session::restoring());

        Self {
            store,
            transition_lock: Arc::new(Mutex::new(())),
            session: Arc::new(session),
            theme: Arc::new(RwLock::new(ThemeMode::default())),
        }
    }

    /// Set the display mode the app launches with
    pub fn with_theme(self, theme: ThemeMode) -> Self {
        *self.theme.write() = theme;
        self
    }

    /// Current session snapshot
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// State derived from the current session
    pub fn state(&self) -> AuthState {
        self.session.borrow().state()
    }

    /// Receiver that sees every applied transition
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.session.subscribe()
    }

    /// Resolves once the launch-time restore has completed.
    pub async fn wait_until_restored(&self) -> Session {
        let mut rx = self.subscribe();
        let restored = rx.wait_for(|session| !session.loading).await;
        match restored {
            Ok(session) => session.clone(),
            // The sender lives in `self`, so the channel cannot close here
            Err(_) => self.session(),
        }
    }

    /// Rebuild the session from persisted values. Runs once per process.
    pub fn restore(&self) -> Session {
        let _guard = self.transition_lock.lock();

        if !self.session.borrow().loading {
            tracing::debug!("Session already restored, ignoring");
            return self.session();
        }

        let token = self.read(keys::USER_TOKEN);
        let team = self.read(keys::USER_TEAM);
        let user = self.read(keys::USER).and_then(|raw| {
            serde_json::from_str::<UserRecord>(&raw)
                .map_err(|e| {
                    tracing::warn!(key = keys::USER, "Discarding unreadable user record: {}", e)
                })
                .ok()
        });

        self.apply(Transition::Restore { token, team, user })
    }

    /// Sign in with the result of a login lookup. Only the first record is used.
    pub fn sign_in(&self, found: &[UserRecord]) -> Session {
        let _guard = self.transition_lock.lock();

        let Some(record) = found.first() else {
            tracing::warn!("Sign-in called with an empty login result");
            return self.session();
        };

        self.write(keys::USER_TOKEN, &record.token_string());
        match &record.user_team {
            Some(team) => self.write(keys::USER_TEAM, team),
            // Don't let a previous user's team leak into the next restore
            None => self.delete(keys::USER_TEAM),
        }
        match serde_json::to_string(record) {
            Ok(json) => self.write(keys::USER, &json),
            Err(e) => tracing::warn!(key = keys::USER, "Failed to encode user record: {}", e),
        }

        self.apply(Transition::sign_in(record))
    }

    /// Drop the stored token and clear the session
    pub fn sign_out(&self) -> Session {
        let _guard = self.transition_lock.lock();

        self.delete(keys::USER_TOKEN);
        self.apply(Transition::SignOut)
    }

    /// Current display mode
    pub fn theme(&self) -> ThemeMode {
        *self.theme.read()
    }

    /// Flip the display mode and return the new one
    pub fn toggle_theme(&self) -> ThemeMode {
        let mut theme = self.theme.write();
        *theme = theme.toggled();
        tracing::debug!(dark = theme.is_dark(), "Toggled theme");
        *theme
    }

    fn apply(&self, transition: Transition) -> Session {
        let name = transition.name();
        let next = reduce(&self.session.borrow(), transition);
        self.session.send_replace(next.clone());

        tracing::info!(
            transition = name,
            state = %next.state(),
            team = next.user_team.as_deref().unwrap_or("-"),
            "Applied session transition"
        );

        next
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => {
                tracing::debug!(key, present = value.is_some(), "Read session key");
                value
            }
            Err(e) => {
                tracing::warn!(key, "Failed to read session key: {}", e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, "Failed to persist session key: {}", e);
        }
    }

    fn delete(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            tracing::warn!(key, "Failed to remove session key: {}", e);
        }
    }
}

impl Clone for AuthController {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            transition_lock: Arc::clone(&self.transition_lock),
            session: Arc::clone(&self.session),
            theme: Arc::clone(&self.theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobcrew_storage::{Database, MemoryStore, StorageError};

    /// Store whose every operation fails
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> jobcrew_storage::Result<Option<String>> {
            Err(StorageError::Unavailable("read refused".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> jobcrew_storage::Result<()> {
            Err(StorageError::Unavailable("write refused".to_string()))
        }

        fn remove(&self, _key: &str) -> jobcrew_storage::Result<()> {
            Err(StorageError::Unavailable("remove refused".to_string()))
        }
    }

    fn memory_controller() -> (MemoryStore, AuthController) {
        let store = MemoryStore::new();
        let controller = AuthController::new(Arc::new(store.clone()));
        (store, controller)
    }

    #[test]
    fn test_restore_with_stored_token() {
        let (store, controller) = memory_controller();
        store.set(keys::USER_TOKEN, "abc123").unwrap();
        store.set(keys::USER_TEAM, "teamA").unwrap();

        assert_eq!(controller.state(), AuthState::Restoring);
        let session = controller.restore();

        assert_eq!(session.state(), AuthState::Authenticated);
        assert!(!session.loading);
        assert_eq!(session.user_token.as_deref(), Some("abc123"));
        assert_eq!(session.user_team.as_deref(), Some("teamA"));
        assert_eq!(controller.session(), session);
    }

    #[test]
    fn test_restore_with_empty_store() {
        let (_, controller) = memory_controller();
        let session = controller.restore();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_restore_with_failing_store() {
        let controller = AuthController::new(Arc::new(FailingStore));
        let session = controller.restore();
        assert_eq!(session.state(), AuthState::Anonymous);
        assert!(!session.loading);
    }

    #[test]
    fn test_restore_discards_unreadable_user() {
        let (store, controller) = memory_controller();
        store.set(keys::USER_TOKEN, "abc123").unwrap();
        store.set(keys::USER, "[object Object]").unwrap();

        let session = controller.restore();
        assert!(session.is_authenticated());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_restore_runs_once() {
        let (store, controller) = memory_controller();
        controller.restore();

        store.set(keys::USER_TOKEN, "late").unwrap();
        let session = controller.restore();
        assert_eq!(session.state(), AuthState::Anonymous);
    }

    #[test]
    fn test_sign_in_persists_and_authenticates() {
        let (store, controller) = memory_controller();
        controller.restore();

        let record = UserRecord::new("sam", 98765).with_team("teamA");
        let session = controller.sign_in(&[record.clone(), UserRecord::new("other", "x")]);

        assert_eq!(session.state(), AuthState::Authenticated);
        assert_eq!(session.user_token.as_deref(), Some("98765"));
        assert_eq!(session.user_name.as_deref(), Some("sam"));
        assert_eq!(store.get(keys::USER_TOKEN).unwrap().as_deref(), Some("98765"));
        assert_eq!(store.get(keys::USER_TEAM).unwrap().as_deref(), Some("teamA"));

        let stored: UserRecord =
            serde_json::from_str(&store.get(keys::USER).unwrap().unwrap()).unwrap();
        assert_eq!(stored, record);
    }

    #[test]
    fn test_sign_in_survives_failing_store() {
        let controller = AuthController::new(Arc::new(FailingStore));
        let session = controller.sign_in(&[UserRecord::new("sam", "abc123")]);
        assert_eq!(session.state(), AuthState::Authenticated);
        assert_eq!(session.user_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_sign_in_with_empty_result() {
        let (_, controller) = memory_controller();
        controller.restore();
        let session = controller.sign_in(&[]);
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let (store, controller) = memory_controller();
        controller.restore();
        controller.sign_in(&[UserRecord::new("sam", "abc123").with_team("teamA")]);

        let once = controller.sign_out();
        assert_eq!(once, Session::anonymous());
        assert_eq!(store.get(keys::USER_TOKEN).unwrap(), None);

        let twice = controller.sign_out();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_sign_out_survives_failing_store() {
        let controller = AuthController::new(Arc::new(FailingStore));
        controller.sign_in(&[UserRecord::new("sam", "abc123")]);
        let session = controller.sign_out();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_session_survives_restart() {
        let db = Database::open_in_memory().unwrap();

        let first = AuthController::new(Arc::new(db.clone()));
        first.restore();
        first.sign_in(&[UserRecord::new("sam", "abc123").with_team("teamA")]);

        let second = AuthController::new(Arc::new(db));
        let session = second.restore();
        assert_eq!(session.user_token.as_deref(), Some("abc123"));
        assert_eq!(session.user_team.as_deref(), Some("teamA"));
        assert_eq!(session.user_name.as_deref(), Some("sam"));
    }

    #[test]
    fn test_toggle_theme_leaves_session_alone() {
        let (_, controller) = memory_controller();
        controller.restore();
        controller.sign_in(&[UserRecord::new("sam", "abc123").with_team("teamA")]);
        let before = controller.session();

        assert_eq!(controller.theme(), ThemeMode::Light);
        assert_eq!(controller.toggle_theme(), ThemeMode::Dark);
        assert_eq!(controller.toggle_theme(), ThemeMode::Light);
        assert_eq!(controller.session(), before);
    }

    #[test]
    fn test_clones_share_state() {
        let (_, controller) = memory_controller();
        let screen_handle = controller.clone();

        controller.restore();
        screen_handle.sign_in(&[UserRecord::new("sam", "abc123")]);
        assert!(controller.session().is_authenticated());

        screen_handle.toggle_theme();
        assert!(controller.theme().is_dark());
    }

    #[test]
    fn test_concurrent_sign_in_and_sign_out_are_serialized() {
        let (store, controller) = memory_controller();
        controller.restore();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let handle = controller.clone();
                scope.spawn(move || {
                    let record = UserRecord::new(format!("user{worker}"), format!("token{worker}"))
                        .with_team(format!("team{worker}"));
                    for round in 0..200 {
                        if (round + worker) % 2 == 0 {
                            handle.sign_in(std::slice::from_ref(&record));
                        } else {
                            handle.sign_out();
                        }
                    }
                });
            }
        });

        let session = controller.session();
        match session.user_token.as_deref() {
            None => assert_eq!(session, Session::anonymous()),
            Some(token) => {
                let worker = token.trim_start_matches("token");
                assert!(!session.loading);
                assert_eq!(session.user_name, Some(format!("user{worker}")));
                assert_eq!(session.user_team, Some(format!("team{worker}")));
                let record_token = session.user.as_ref().map(UserRecord::token_string);
                assert_eq!(record_token.as_deref(), Some(token));
                assert_eq!(store.get(keys::USER_TEAM).unwrap(), session.user_team);
            }
        }
        assert_eq!(store.get(keys::USER_TOKEN).unwrap(), session.user_token);
    }

    #[tokio::test]
    async fn test_wait_until_restored() {
        let (store, controller) = memory_controller();
        store.set(keys::USER_TOKEN, "abc123").unwrap();

        let restorer = controller.clone();
        let task = tokio::spawn(async move { restorer.restore() });

        let session = controller.wait_until_restored().await;
        assert!(!session.loading);
        assert_eq!(session.user_token.as_deref(), Some("abc123"));
        task.await.unwrap();
    }
}
