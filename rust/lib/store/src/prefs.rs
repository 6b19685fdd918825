//! Client-side preferences: theme and login state, persisted separately
//! from the inventory snapshot.

use std::path::Path;

use serde::{Deserialize, Serialize};

use seedstock_core::Authenticator;

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,

    #[serde(rename = "logged-in", default)]
    pub logged_in: bool,

    #[serde(default)]
    pub username: String,
}

impl Preferences {
    /// Load preferences from disk, or defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| StoreError::Persist(e.to_string()))?;
        toml::from_str(&content).map_err(|e| StoreError::Serialize(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Persist(e.to_string()))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| StoreError::Serialize(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| StoreError::Persist(e.to_string()))
    }

    /// Check credentials against the injected authenticator and record the
    /// session on success. Returns whether login succeeded.
    pub fn login(&mut self, auth: &dyn Authenticator, username: &str, password: &str) -> bool {
        if !auth.authenticate(username, password) {
            return false;
        }
        self.logged_in = true;
        self.username = username.to_string();
        true
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.username.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedstock_core::StaticCredentials;

    #[test]
    fn login_records_session() {
        let auth = StaticCredentials::default();
        let mut prefs = Preferences::default();

        assert!(!prefs.login(&auth, "admin", "wrong"));
        assert!(!prefs.logged_in);

        assert!(prefs.login(&auth, "admin", "admin123"));
        assert!(prefs.logged_in);
        assert_eq!(prefs.username, "admin");

        prefs.logout();
        assert!(!prefs.logged_in);
        assert!(prefs.username.is_empty());
    }

    #[test]
    fn prefs_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let prefs = Preferences {
            theme: Theme::Dark,
            logged_in: true,
            username: "admin".into(),
        };
        prefs.save(&path).unwrap();

        let back = Preferences::load(&path).unwrap();
        assert_eq!(back.theme, Theme::Dark);
        assert!(back.logged_in);
        assert_eq!(back.username, "admin");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert!(!prefs.logged_in);
    }
}
