use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::auth::SessionData;
use crate::models::Account;

const ACCOUNTS_FILE: &str = "accounts";
const SESSION_FILE: &str = "session";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredData<T> {
    pub data: T,
    pub saved_at: DateTime<Utc>,
}

impl<T> StoredData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            saved_at: Utc::now(),
        }
    }
}

/// JSON files under the data directory
pub struct StorageManager {
    data_dir: PathBuf,
}

impl StorageManager {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", name))
    }

    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<StoredData<T>>> {
        let path = self.file_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read data file: {}", name))?;

        let stored: StoredData<T> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse data file: {}", name))?;

        Ok(Some(stored))
    }

    /// Write through a temp file so a crash never leaves half a file behind
    fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let stored = StoredData::new(data);
        let path = self.file_path(name);
        let tmp = path.with_extension("json.tmp");
        let contents = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&tmp, contents)
            .with_context(|| format!("Failed to write data file: {}", name))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace data file: {}", name))?;
        debug!(file = name, "Saved");
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        let path = self.file_path(name);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove data file: {}", name))?;
            debug!(file = name, "Removed");
        }
        Ok(())
    }

    // ===== Accounts =====

    pub fn load_accounts(&self) -> Result<Vec<Account>> {
        Ok(self
            .load::<Vec<Account>>(ACCOUNTS_FILE)?
            .map(|stored| stored.data)
            .unwrap_or_default())
    }

    pub fn save_accounts(&self, accounts: &[Account]) -> Result<()> {
        self.save(ACCOUNTS_FILE, &accounts)
    }

    // ===== Session =====

    /// `None` means nobody is logged in
    pub fn load_session(&self) -> Result<Option<SessionData>> {
        Ok(self.load::<SessionData>(SESSION_FILE)?.map(|stored| stored.data))
    }

    /// Writes the session, or removes the file when logged out
    pub fn save_session(&self, session: Option<&SessionData>) -> Result<()> {
        match session {
            Some(data) => self.save(SESSION_FILE, data),
            None => self.remove(SESSION_FILE),
        }
    }
}
