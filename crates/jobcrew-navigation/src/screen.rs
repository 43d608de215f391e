//! Screen catalogue and stack selection

use serde::{Deserialize, Serialize};

use jobcrew_session::{AuthState, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    SignIn,
    SignUp,
    Home,
    NewJob,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::SignIn => "SignIn",
            Screen::SignUp => "SignUp",
            Screen::Home => "Home",
            Screen::NewJob => "NewJob",
        }
    }

    /// Header styling; unauthenticated screens draw their own.
    pub fn header(&self) -> Option<HeaderOptions> {
        match self {
            Screen::Home | Screen::NewJob => Some(HeaderOptions::authenticated()),
            Screen::SignIn | Screen::SignUp => None,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SignIn" => Ok(Screen::SignIn),
            "SignUp" => Ok(Screen::SignUp),
            "Home" => Ok(Screen::Home),
            "NewJob" => Ok(Screen::NewJob),
            _ => Err(format!("Unknown screen: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackKind {
    Unauthenticated,
    Authenticated,
}

impl StackKind {
    pub fn screens(&self) -> &'static [Screen] {
        match self {
            StackKind::Unauthenticated => &[Screen::SignIn, Screen::SignUp],
            StackKind::Authenticated => &[Screen::Home, Screen::NewJob],
        }
    }

    pub fn initial_screen(&self) -> Screen {
        self.screens()[0]
    }

    pub fn contains(&self, screen: Screen) -> bool {
        self.screens().contains(&screen)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StackKind::Unauthenticated => "unauthenticated",
            StackKind::Authenticated => "authenticated",
        }
    }
}

impl std::fmt::Display for StackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the navigation container renders at its root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootView {
    Spinner,
    Stack(StackKind),
}

impl RootView {
    pub fn stack(&self) -> Option<StackKind> {
        match self {
            RootView::Spinner => None,
            RootView::Stack(kind) => Some(*kind),
        }
    }
}

pub fn choose(session: &Session) -> RootView {
    match session.state() {
        AuthState::Restoring => RootView::Spinner,
        AuthState::Authenticated => RootView::Stack(StackKind::Authenticated),
        AuthState::Anonymous => RootView::Stack(StackKind::Unauthenticated),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderOptions {
    pub background_color: &'static str,
    pub tint_color: &'static str,
    pub bold_title: bool,
    /// Header carries a sign-out button
    pub sign_out_action: bool,
}

impl HeaderOptions {
    pub fn authenticated() -> Self {
        Self {
            background_color: "#009387",
            tint_color: "#fff",
            bold_title: true,
            sign_out_action: true,
        }
    }
}
