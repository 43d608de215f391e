//! JobCrew Core
//!
//! Wires the key-value store, the session controller and the navigator
//! into one [`Shell`] the host binary launches.

mod config;
mod error;
mod shell;

pub use config::Config;
pub use error::CoreError;
pub use shell::Shell;

// Re-export core components
pub use jobcrew_navigation::{
    choose, HeaderOptions, NavigationError, Navigator, Palette, RootView, Route, Screen, StackKind,
};
pub use jobcrew_session::{AuthController, AuthState, Session, ThemeMode, UserRecord};
pub use jobcrew_storage::{Database, KeyValueStore, MemoryStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
