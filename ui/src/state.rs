use payloads::responses;
use yewdux::prelude::*;

/// The logged-in admin identity plus the bearer token authorizing
/// mutating calls.
#[derive(Clone, PartialEq)]
pub struct Session {
    pub admin: responses::AdminIdentity,
    pub token: String,
}

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    /// Persisted storage has not been consulted yet.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(Session),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.auth_state {
            AuthState::LoggedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn current_admin(&self) -> Option<&responses::AdminIdentity> {
        self.session().map(|s| &s.admin)
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.session().map(|s| s.token.clone())
    }

    pub fn login(&mut self, session: Session) {
        self.auth_state = AuthState::LoggedIn(session);
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}
