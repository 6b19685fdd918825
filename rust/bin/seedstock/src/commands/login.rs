//! Login / logout and theme commands, persisted in the preferences file.

use anyhow::Result;
use seedstock_core::{StaticCredentials, password_meets_policy};
use seedstock_store::{Preferences, Theme};

use crate::config::ClientConfig;

pub fn login(username: &str, password: &str, config: &ClientConfig) -> Result<()> {
    let prefs_path = config.prefs_path();
    let mut prefs = Preferences::load(&prefs_path)?;

    let auth = StaticCredentials::default();
    if !prefs.login(&auth, username, password) {
        anyhow::bail!("Login failed: invalid credentials.");
    }
    if !password_meets_policy(password) {
        eprintln!(
            "Warning: this password does not meet the recommended policy \
             (8+ characters with upper, lower, digit and special)."
        );
    }

    prefs.save(&prefs_path)?;
    println!("Logged in as {}.", username);
    Ok(())
}

pub fn logout(config: &ClientConfig) -> Result<()> {
    let prefs_path = config.prefs_path();
    let mut prefs = Preferences::load(&prefs_path)?;
    prefs.logout();
    prefs.save(&prefs_path)?;
    println!("Logged out.");
    Ok(())
}

/// Set the theme explicitly, or toggle it when no value is given.
pub fn theme(value: Option<&str>, config: &ClientConfig) -> Result<()> {
    let prefs_path = config.prefs_path();
    let mut prefs = Preferences::load(&prefs_path)?;

    prefs.theme = match value {
        Some("light") => Theme::Light,
        Some("dark") => Theme::Dark,
        Some(other) => anyhow::bail!("Unknown theme \"{}\" (expected light or dark).", other),
        None => prefs.theme.toggle(),
    };

    prefs.save(&prefs_path)?;
    println!(
        "Theme set to {}.",
        match prefs.theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    );
    Ok(())
}
