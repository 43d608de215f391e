//! Route stack for the mounted screen stack

use serde::Serialize;

use jobcrew_session::{Session, UserRecord};

use crate::error::NavigationError;
use crate::screen::{choose, RootView, Screen};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub screen: Screen,
    /// Initial parameter for `Home`
    pub user: Option<UserRecord>,
}

impl Route {
    fn new(screen: Screen, user: Option<&UserRecord>) -> Self {
        let user = match screen {
            Screen::Home => user.cloned(),
            _ => None,
        };
        Self { screen, user }
    }
}

pub struct Navigator {
    root: RootView,
    routes: Vec<Route>,
    user: Option<UserRecord>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            root: RootView::Spinner,
            routes: Vec::new(),
            user: None,
        }
    }

    pub fn root(&self) -> RootView {
        self.root
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn current(&self) -> Option<&Route> {
        self.routes.last()
    }

    /// Follow the session. Switching stacks drops the old route history.
    pub fn sync(&mut self, session: &Session) -> RootView {
        let next = choose(session);
        self.user = session.user.clone();

        if next == self.root {
            // Same stack, possibly a different user signed in on top
            for route in self.routes.iter_mut().filter(|r| r.screen == Screen::Home) {
                route.user = self.user.clone();
            }
            return next;
        }

        self.root = next;
        self.routes = match next.stack() {
            Some(stack) => vec![Route::new(stack.initial_screen(), self.user.as_ref())],
            None => Vec::new(),
        };

        tracing::info!(
            root = ?next,
            screen = self.current().map(|r| r.screen.as_str()).unwrap_or("-"),
            "Switched root view"
        );

        next
    }

    pub fn push(&mut self, screen: Screen) -> Result<&Route> {
        let stack = self.root.stack().ok_or(NavigationError::NotMounted)?;
        if !stack.contains(screen) {
            return Err(NavigationError::ScreenNotInStack { screen, stack });
        }

        self.routes.push(Route::new(screen, self.user.as_ref()));
        tracing::debug!(screen = %screen, depth = self.routes.len(), "Pushed screen");

        Ok(&self.routes[self.routes.len() - 1])
    }

    /// Pop the top route. The stack's root route stays.
    pub fn pop(&mut self) -> Option<Route> {
        if self.routes.len() <= 1 {
            return None;
        }
        self.routes.pop()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
