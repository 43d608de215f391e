//! JobCrew Session Management
//!
//! The login session is a small state machine:
//! ```text
//! Restoring ──restore(token)──▶ Authenticated ◀──sign_in──┐
//!     │                            │                       │
//!     └──restore(none)──▶ Anonymous ◀──sign_out────────────┘
//! ```
//! Transitions are computed by the pure [`reduce`] function. The
//! [`AuthController`] performs the store I/O around them and never fails.

mod controller;
mod session;
mod transition;

pub use controller::AuthController;
pub use session::{AuthState, Session, ThemeMode, UserRecord};
pub use transition::{reduce, Transition};
