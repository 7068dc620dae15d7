use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::CredentialStore;
use crate::error::{AccountError, Result};

/// Identity of an authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
}

impl SessionData {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            logged_in_at: Utc::now(),
        }
    }
}

/// Current authentication state. A username is present exactly when the
/// session is authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    data: Option<SessionData>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a session loaded from disk
    pub fn restore(data: Option<SessionData>) -> Self {
        Self { data }
    }

    /// Authenticate against the store. State is untouched on failure.
    pub fn login(&mut self, username: &str, password: &str, store: &CredentialStore) -> Result<()> {
        if !store.verify(username, password) {
            warn!(username, "Login rejected");
            return Err(AccountError::InvalidCredentials);
        }
        self.data = Some(SessionData::new(username));
        info!(username, "Logged in");
        Ok(())
    }

    /// Always succeeds, even when nobody is logged in
    pub fn logout(&mut self) {
        if let Some(data) = self.data.take() {
            info!(username = %data.username, "Logged out");
        }
    }

    /// End the session if it belongs to `username`. Returns whether it did.
    pub fn end_if_current(&mut self, username: &str) -> bool {
        if self.current_username() == Some(username) {
            self.logout();
            true
        } else {
            false
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.is_some()
    }

    pub fn current_username(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.username.as_str())
    }

    pub fn data(&self) -> Option<&SessionData> {
        self.data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(username: &str, password: &str) -> CredentialStore {
        let mut store = CredentialStore::new();
        store.register(username, password).unwrap();
        store
    }

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.current_username(), None);
    }

    #[test]
    fn test_login_logout_scenario() {
        let store = store_with("alice", "secret");
        let mut session = Session::new();

        session.login("alice", "secret", &store).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.current_username(), Some("alice"));

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.current_username(), None);
    }

    #[test]
    fn test_failed_login_leaves_state_unchanged() {
        let store = store_with("alice", "secret");
        let mut session = Session::new();

        let err = session.login("alice", "wrong", &store).unwrap_err();
        assert!(matches!(err, AccountError::InvalidCredentials));
        assert!(!session.is_authenticated());

        session.login("alice", "secret", &store).unwrap();
        let before = session.clone();
        assert!(session.login("mallory", "secret", &store).is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_logout_when_unauthenticated() {
        let mut session = Session::new();
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_end_if_current() {
        let mut store = store_with("alice", "secret");
        store.register("bob", "pw").unwrap();
        let mut session = Session::new();
        session.login("alice", "secret", &store).unwrap();

        assert!(!session.end_if_current("bob"));
        assert_eq!(session.current_username(), Some("alice"));

        assert!(session.end_if_current("alice"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_restore() {
        let session = Session::restore(Some(SessionData::new("alice")));
        assert!(session.is_authenticated());
        assert_eq!(session.current_username(), Some("alice"));
        assert!(!Session::restore(None).is_authenticated());
    }
}
