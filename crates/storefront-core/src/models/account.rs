use std::fmt;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::{AccountError, Result};

/// Salt length in bytes for hashed credentials.
const SALT_LEN: usize = 16;

/// A stored password: either the plaintext itself or an Argon2id PHC string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Credential {
    Plain(String),
    Argon2(String),
}

impl Credential {
    pub fn plain(password: &str) -> Self {
        Credential::Plain(password.to_string())
    }

    /// Hash a password with Argon2id and a random salt
    pub fn hashed(password: &str) -> Result<Self> {
        let mut salt_bytes = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| AccountError::Hashing(e.to_string()))?;
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountError::Hashing(e.to_string()))?;
        Ok(Credential::Argon2(hash.to_string()))
    }

    /// Exact, case-sensitive comparison against the stored password.
    /// A malformed hash never matches.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Credential::Plain(stored) => stored.as_bytes() == candidate.as_bytes(),
            Credential::Argon2(phc) => match PasswordHash::new(phc) {
                Ok(parsed) => Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            },
        }
    }

    /// An empty stored value can never come from `register`
    pub fn is_blank(&self) -> bool {
        match self {
            Credential::Plain(value) | Credential::Argon2(value) => value.is_empty(),
        }
    }

    pub fn is_hashed(&self) -> bool {
        matches!(self, Credential::Argon2(_))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Plain(_) => f.write_str("Credential::Plain(<redacted>)"),
            Credential::Argon2(_) => f.write_str("Credential::Argon2(<redacted>)"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub credential: Credential,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(username: &str, credential: Credential) -> Self {
        Self {
            username: username.to_string(),
            credential,
            created_at: Utc::now(),
        }
    }

    /// Both username and password must match exactly
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.credential.matches(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_credential_is_case_sensitive() {
        let cred = Credential::plain("Secret");
        assert!(cred.matches("Secret"));
        assert!(!cred.matches("secret"));
        assert!(!cred.matches("Secret "));
    }

    #[test]
    fn test_hashed_credential_matches_same_as_plain() {
        let cred = Credential::hashed("hunter2").unwrap();
        assert!(cred.is_hashed());
        assert!(cred.matches("hunter2"));
        assert!(!cred.matches("Hunter2"));
        assert!(!cred.matches(""));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = Credential::hashed("same").unwrap();
        let b = Credential::hashed("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let cred = Credential::Argon2("not-a-phc-string".to_string());
        assert!(!cred.matches("not-a-phc-string"));
    }

    #[test]
    fn test_blank_credentials() {
        assert!(Credential::plain("").is_blank());
        assert!(Credential::Argon2(String::new()).is_blank());
        assert!(!Credential::plain("pw").is_blank());
    }

    #[test]
    fn test_debug_redacts_password() {
        let account = Account::new("alice", Credential::plain("topsecret"));
        let shown = format!("{:?}", account);
        assert!(shown.contains("alice"));
        assert!(!shown.contains("topsecret"));
    }

    #[test]
    fn test_credential_serialization_shape() {
        let json = serde_json::to_value(Credential::plain("pw")).unwrap();
        assert_eq!(json["kind"], "plain");
        assert_eq!(json["value"], "pw");
    }
}
