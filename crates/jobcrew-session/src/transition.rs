//! Session transitions
//!
//! `reduce` is total and free of side effects; store I/O happens in the
//! controller before a transition is applied.

use crate::session::{Session, UserRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Values read from the store at launch
    Restore {
        token: Option<String>,
        team: Option<String>,
        user: Option<UserRecord>,
    },
    SignIn {
        user_name: Option<String>,
        token: String,
        team: Option<String>,
        user: UserRecord,
    },
    SignOut,
}

impl Transition {
    pub fn name(&self) -> &'static str {
        match self {
            Transition::Restore { .. } => "restore",
            Transition::SignIn { .. } => "sign_in",
            Transition::SignOut => "sign_out",
        }
    }

    /// Build a sign-in from the first entry of a login result.
    pub fn sign_in(record: &UserRecord) -> Self {
        Transition::SignIn {
            user_name: record.username.clone(),
            token: record.token_string(),
            team: record.user_team.clone(),
            user: record.clone(),
        }
    }
}

pub fn reduce(prev: &Session, transition: Transition) -> Session {
    match transition {
        // Restore only applies once; `loading` never comes back
        Transition::Restore { .. } if !prev.loading => prev.clone(),
        Transition::Restore {
            token: Some(token),
            team,
            user,
        } => Session {
            loading: false,
            user_name: user.as_ref().and_then(|u| u.username.clone()),
            user_token: Some(token),
            user_team: team,
            user,
        },
        Transition::Restore { token: None, .. } => Session::anonymous(),
        Transition::SignIn {
            user_name,
            token,
            team,
            user,
        } => Session {
            loading: false,
            user_name,
            user_token: Some(token),
            user_team: team,
            user: Some(user),
        },
        Transition::SignOut => Session::anonymous(),
    }
}
