//! Application configuration management.
//!
//! Holds the data directory override, the password storage mode and the
//! last username used on the account screen.
//!
//! Configuration is stored at `~/.config/storefront/config.json`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "storefront";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "STOREFRONT_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub hash_passwords: bool,
    pub last_username: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Where accounts and session live: env override, then config, then the
    /// platform data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        self.resolve_data_dir(std::env::var_os(DATA_DIR_ENV))
    }

    fn resolve_data_dir(&self, env_override: Option<OsString>) -> Result<PathBuf> {
        if let Some(dir) = env_override.filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.hash_passwords);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            data_dir: Some(dir.path().join("data")),
            hash_passwords: true,
            last_username: Some("alice".to_string()),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "hash_passwords": true }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(config.hash_passwords);
        assert_eq!(config.last_username, None);
    }

    #[test]
    fn test_data_dir_precedence() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };

        let env = Some(OsString::from("/from/env"));
        assert_eq!(
            config.resolve_data_dir(env.clone()).unwrap(),
            PathBuf::from("/from/env")
        );
        assert_eq!(
            config.resolve_data_dir(None).unwrap(),
            PathBuf::from("/from/config")
        );
        // An empty variable counts as unset
        assert_eq!(
            config.resolve_data_dir(Some(OsString::new())).unwrap(),
            PathBuf::from("/from/config")
        );

        let unset = Config::default();
        assert_eq!(unset.resolve_data_dir(env).unwrap(), PathBuf::from("/from/env"));
        if let Some(platform) = dirs::data_dir() {
            assert_eq!(unset.resolve_data_dir(None).unwrap(), platform.join(APP_NAME));
        }
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
