//! Account operations as the user screen drives them.
//!
//! `AccountService` owns the credential store and the session, and writes both
//! back to disk after every successful change.

use tracing::{debug, info, warn};

use crate::auth::{CredentialStore, Session};
use crate::config::Config;
use crate::error::{AccountError, Result};
use crate::persistence::StorageManager;

pub struct AccountService {
    store: CredentialStore,
    session: Session,
    storage: Option<StorageManager>,
}

impl AccountService {
    /// A service with nothing on disk
    pub fn in_memory(hash_passwords: bool) -> Self {
        Self {
            store: CredentialStore::new().with_hashing(hash_passwords),
            session: Session::new(),
            storage: None,
        }
    }

    /// Load accounts and session from the data directory.
    /// A saved session for an account that no longer exists is discarded.
    pub fn open(storage: StorageManager, hash_passwords: bool) -> Result<Self> {
        let accounts = storage.load_accounts()?;
        let store = CredentialStore::from_accounts(accounts).with_hashing(hash_passwords);

        let mut saved = storage.load_session()?;
        let orphaned = saved.as_ref().is_some_and(|d| !store.contains(&d.username));
        if orphaned {
            if let Some(data) = saved.take() {
                warn!(username = %data.username, "Discarding session for unknown account");
            }
            storage.save_session(None)?;
        }
        debug!(accounts = store.len(), logged_in = saved.is_some(), "Account data loaded");

        Ok(Self {
            store,
            session: Session::restore(saved),
            storage: Some(storage),
        })
    }

    /// Open using the configured data directory
    pub fn from_config(config: &Config) -> Result<Self> {
        let storage = StorageManager::new(config.data_dir()?)?;
        Self::open(storage, config.hash_passwords)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Register and log in as the new account
    pub fn sign_up(&mut self, username: &str, password: &str) -> Result<()> {
        self.store.register(username, password)?;
        if let Err(e) = self.persist_accounts() {
            // Not on disk, so not registered
            self.store.delete(username)?;
            return Err(e);
        }
        self.session.login(username, password, &self.store)?;
        self.persist_session()?;
        info!(username, "Signed up");
        Ok(())
    }

    pub fn log_in(&mut self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(AccountError::EmptyField);
        }
        self.session.login(username, password, &self.store)?;
        self.persist_session()
    }

    pub fn log_out(&mut self) -> Result<()> {
        self.session.logout();
        self.persist_session()
    }

    /// Change the logged-in user's password
    pub fn change_password(&mut self, new_password: &str) -> Result<()> {
        let username = self.current_username()?;
        self.store.update_password(&username, new_password)?;
        self.persist_accounts()
    }

    /// Delete the logged-in user's account and end the session
    pub fn delete_account(&mut self) -> Result<()> {
        let username = self.current_username()?;
        self.store.delete(&username)?;
        self.session.end_if_current(&username);
        self.persist_accounts()?;
        self.persist_session()
    }

    fn current_username(&self) -> Result<String> {
        self.session
            .current_username()
            .map(str::to_string)
            .ok_or(AccountError::NotAuthenticated)
    }

    fn persist_accounts(&self) -> Result<()> {
        if let Some(ref storage) = self.storage {
            storage.save_accounts(self.store.accounts()).map_err(|e| {
                warn!(error = %e, "Failed to save accounts");
                AccountError::Storage(e)
            })?;
        }
        Ok(())
    }

    fn persist_session(&self) -> Result<()> {
        if let Some(ref storage) = self.storage {
            storage.save_session(self.session.data()).map_err(|e| {
                warn!(error = %e, "Failed to save session");
                AccountError::Storage(e)
            })?;
        }
        Ok(())
    }
}
