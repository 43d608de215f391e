//! JobCrew Navigation
//!
//! Picks what the root of the app shows from the session:
//!   1. Restore pending → spinner
//!   2. Token present → authenticated stack (`Home`, `NewJob`)
//!   3. Otherwise → unauthenticated stack (`SignIn`, `SignUp`)

mod error;
mod navigator;
mod screen;
mod theme;

pub use error::NavigationError;
pub use navigator::{Navigator, Route};
pub use screen::{choose, HeaderOptions, RootView, Screen, StackKind};
pub use theme::Palette;

pub type Result<T> = std::result::Result<T, NavigationError>;
