use tracing::{debug, info};

use crate::error::{AccountError, Result};
use crate::models::{Account, Credential};

/// Registered accounts, looked up by exact username.
#[derive(Debug, Default)]
pub struct CredentialStore {
    accounts: Vec<Account>,
    hash_passwords: bool,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store new and updated passwords as Argon2id hashes instead of plaintext
    pub fn with_hashing(mut self, hash_passwords: bool) -> Self {
        self.hash_passwords = hash_passwords;
        self
    }

    /// Build a store from previously persisted accounts.
    /// Accounts with a blank username or password, and later duplicates of a
    /// username, are dropped.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        let mut store = Self::new();
        for account in accounts {
            if account.username.is_empty() || account.credential.is_blank() {
                debug!(username = %account.username, "Skipping persisted account with empty field");
                continue;
            }
            if store.contains(&account.username) {
                debug!(username = %account.username, "Skipping duplicate persisted account");
                continue;
            }
            store.accounts.push(account);
        }
        store
    }

    /// Add a new account
    pub fn register(&mut self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(AccountError::EmptyField);
        }
        if self.contains(username) {
            return Err(AccountError::DuplicateUsername(username.to_string()));
        }

        let credential = self.make_credential(password)?;
        self.accounts.push(Account::new(username, credential));
        info!(username, hashed = self.hash_passwords, "Account registered");
        Ok(())
    }

    /// Check a username/password pair. Unknown users and wrong passwords
    /// are indistinguishable to the caller.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.accounts.iter().any(|a| a.matches(username, password))
    }

    /// Replace the stored password for an existing account
    pub fn update_password(&mut self, username: &str, new_password: &str) -> Result<()> {
        if new_password.is_empty() {
            return Err(AccountError::EmptyField);
        }
        let credential = self.make_credential(new_password)?;
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.username == username)
            .ok_or_else(|| AccountError::NotFound(username.to_string()))?;
        account.credential = credential;
        info!(username, "Password updated");
        Ok(())
    }

    /// Remove an account
    pub fn delete(&mut self, username: &str) -> Result<()> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.username == username)
            .ok_or_else(|| AccountError::NotFound(username.to_string()))?;
        self.accounts.remove(index);
        info!(username, "Account deleted");
        Ok(())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.iter().any(|a| a.username == username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|a| a.username.as_str())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    fn make_credential(&self, password: &str) -> Result<Credential> {
        if self.hash_passwords {
            Credential::hashed(password)
        } else {
            Ok(Credential::plain(password))
        }
    }
}
