//! Server configuration, loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Listen address, overridable with --listen.
    #[serde(default = "default_listen")]
    pub listen: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    /// Directory holding the database and anything else the server writes.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Explicit database path. Defaults to `<data_dir>/seedstock.db`.
    #[serde(default)]
    pub sqlite_path: Option<String>,
}

fn default_listen() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_data_dir() -> String {
    "./data".to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            sqlite_path: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            storage: StorageSection::default(),
        }
    }
}

impl ServerConfig {
    /// A bare name resolves to `/etc/seedstock/<name>.toml`; anything with a
    /// `/` or `.` in it is treated as a path.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from("/etc/seedstock").join(format!("{}.toml", name_or_path))
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn resolve_sqlite_path(&self) -> PathBuf {
        match &self.storage.sqlite_path {
            Some(p) => PathBuf::from(p),
            None => PathBuf::from(&self.storage.data_dir).join("seedstock.db"),
        }
    }
}
