//! App shell
//!
//! Owns the store, the session controller and the navigator. Screens get
//! the [`AuthController`] handle; the navigator follows every session change.

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::task::JoinHandle;

use jobcrew_navigation::{Navigator, Palette, RootView, Screen};
use jobcrew_session::{AuthController, Session, UserRecord};
use jobcrew_storage::{Database, KeyValueStore};

use crate::config::Config;
use crate::Result;

pub struct Shell {
    config: Config,
    controller: AuthController,
    navigator: Arc<RwLock<Navigator>>,
}

impl Shell {
    /// Open the on-disk store named by the config
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        tracing::debug!(path = %config.database_path.display(), "Opened session store");

        Ok(Self::with_store(config, Arc::new(db)))
    }

    pub fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let controller = AuthController::new(store).with_theme(config.initial_theme);

        Self {
            config,
            controller,
            navigator: Arc::new(RwLock::new(Navigator::new())),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle for screens
    pub fn controller(&self) -> &AuthController {
        &self.controller
    }

    /// Restore the persisted session and mount the matching stack.
    pub async fn launch(&self) -> RootView {
        let delay = self.config.restore_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let session = self.controller.restore();
        let root = self.sync(&session);

        tracing::info!(state = %session.state(), root = ?root, "Shell launched");

        root
    }

    /// Keep the navigator in step with sign-ins and sign-outs made
    /// directly through the controller handle.
    pub fn follow_session(&self) -> JoinHandle<()> {
        let mut rx = self.controller.subscribe();
        let navigator = Arc::clone(&self.navigator);

        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let session = rx.borrow_and_update().clone();
                navigator.write().sync(&session);
            }
        })
    }

    pub fn root(&self) -> RootView {
        self.navigator.read().root()
    }

    pub fn current_screen(&self) -> Option<Screen> {
        self.navigator.read().current().map(|route| route.screen)
    }

    pub fn session(&self) -> Session {
        self.controller.session()
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.controller.theme())
    }

    pub fn sign_in(&self, found: &[UserRecord]) -> RootView {
        let session = self.controller.sign_in(found);
        self.sync(&session)
    }

    pub fn sign_out(&self) -> RootView {
        let session = self.controller.sign_out();
        self.sync(&session)
    }

    pub fn toggle_theme(&self) -> Palette {
        Palette::for_mode(self.controller.toggle_theme())
    }

    pub fn navigate(&self, screen: Screen) -> Result<Screen> {
        let mut navigator = self.navigator.write();
        let route = navigator.push(screen)?;
        Ok(route.screen)
    }

    pub fn back(&self) -> Option<Screen> {
        self.navigator.write().pop().map(|route| route.screen)
    }

    fn sync(&self, session: &Session) -> RootView {
        self.navigator.write().sync(session)
    }
}
