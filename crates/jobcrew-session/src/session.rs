//! Session data structures

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a login result, as handed over by the sign-in screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Tokens arrive as strings or numbers depending on the backend
    #[serde(default)]
    pub user_token: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_team: Option<String>,
    /// Any other profile fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(username: impl Into<String>, token: impl Into<Value>) -> Self {
        Self {
            username: Some(username.into()),
            user_token: token.into(),
            user_team: None,
            extra: Map::new(),
        }
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.user_team = Some(team.into());
        self
    }

    /// String form of the token; numbers and other scalars are rendered as text.
    pub fn token_string(&self) -> String {
        match &self.user_token {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// True until the launch-time restore has completed
    pub loading: bool,
    pub user_name: Option<String>,
    pub user_token: Option<String>,
    pub user_team: Option<String>,
    pub user: Option<UserRecord>,
}

impl Session {
    /// Fresh session at process start
    pub fn restoring() -> Self {
        Self {
            loading: true,
            ..Self::anonymous()
        }
    }

    pub fn anonymous() -> Self {
        Self {
            loading: false,
            user_name: None,
            user_token: None,
            user_team: None,
            user: None,
        }
    }

    pub fn state(&self) -> AuthState {
        if self.loading {
            AuthState::Restoring
        } else if self.user_token.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state() == AuthState::Authenticated
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::restoring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthState {
    /// Waiting for persisted values to be read at launch
    Restoring,
    Authenticated,
    Anonymous,
}

impl AuthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthState::Restoring => "restoring",
            AuthState::Authenticated => "authenticated",
            AuthState::Anonymous => "anonymous",
        }
    }
}

impl std::fmt::Display for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display mode flag. Independent of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("Unknown theme mode: {}", s)),
        }
    }
}
