//! Navigation error types

use thiserror::Error;

use crate::screen::{Screen, StackKind};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Screen {screen} is not part of the {stack} stack")]
    ScreenNotInStack { screen: Screen, stack: StackKind },

    #[error("No stack is mounted while the session is restoring")]
    NotMounted,
}
