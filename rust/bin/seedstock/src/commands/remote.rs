//! Server commands: status check and push-only sync.

use anyhow::Result;
use seedstock_core::{EntryDraft, Kind};

use crate::commands::entry::open_store;
use crate::config::ClientConfig;

fn base_url(config: &ClientConfig) -> Result<String> {
    if config.server.is_empty() {
        anyhow::bail!("No server URL configured. Set `server` in {}.", ClientConfig::default_path().display());
    }
    Ok(config.server.trim_end_matches('/').to_string())
}

pub fn status(config: &ClientConfig) -> Result<()> {
    let base = base_url(config)?;
    let client = reqwest::blocking::Client::new();

    let health: serde_json::Value = client
        .get(format!("{}/health", base))
        .send()
        .map_err(|e| anyhow::anyhow!("failed to connect to server: {}", e))?
        .json()?;
    let version: serde_json::Value = client.get(format!("{}/version", base)).send()?.json()?;

    println!("Server:  {}", base);
    println!("Status:  {}", health["status"].as_str().unwrap_or("unknown"));
    println!(
        "Version: {} {}",
        version["name"].as_str().unwrap_or("?"),
        version["version"].as_str().unwrap_or("?")
    );
    Ok(())
}

/// Push every local entry to the server as a create. The local ledger and
/// the server database are independent copies; this never pulls, dedupes or
/// deletes — re-running it re-submits everything.
pub fn sync(config: &ClientConfig) -> Result<()> {
    let base = base_url(config)?;
    let store = open_store(config)?;
    let client = reqwest::blocking::Client::new();

    let mut pushed = 0usize;
    let mut failed = 0usize;

    for kind in Kind::ALL {
        // Oldest first, so the server's newest-first ordering matches ours.
        for entry in store.entries(kind).iter().rev() {
            let draft = EntryDraft::from(entry);
            let resp = client
                .post(format!("{}/api/{}", base, kind.as_str()))
                .json(&draft)
                .send()
                .map_err(|e| anyhow::anyhow!("failed to connect to server: {}", e))?;

            if resp.status().is_success() {
                pushed += 1;
            } else {
                failed += 1;
                let body: serde_json::Value = resp.json().unwrap_or_default();
                eprintln!(
                    "Failed to push {} entry {}: {}",
                    kind.as_str(),
                    entry.id,
                    body["details"].as_str().unwrap_or("unknown error")
                );
            }
        }
    }

    println!("Pushed {} entries ({} failed).", pushed, failed);
    Ok(())
}
