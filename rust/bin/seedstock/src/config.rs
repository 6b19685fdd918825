//! Client-side configuration.
//!
//! Reads/writes `~/.seedstock/config.toml`. The local ledger and the
//! preferences file live next to it in the same directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server URL for `sync` and `status` (e.g. "http://localhost:3000").
    /// Everything else works offline against the local ledger.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,

    /// Directory holding the ledger and preferences.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    dirs_path().to_string_lossy().to_string()
}

impl ClientConfig {
    /// Default config file path: ~/.seedstock/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path of the JSON ledger file.
    pub fn ledger_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("inventory.json")
    }

    /// Path of the preferences file (theme, login state).
    pub fn prefs_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("prefs.toml")
    }
}

/// Return the seedstock config directory (~/.seedstock).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".seedstock")
}
