//! `seedstock config` — inspect and change the client configuration.

use std::path::Path;

use anyhow::Result;

use crate::config::ClientConfig;

pub fn show(config: &ClientConfig, path: &Path) -> Result<()> {
    println!("Config file: {}", path.display());
    if config.server.is_empty() {
        println!("Server:      (not set)");
    } else {
        println!("Server:      {}", config.server);
    }
    println!("Data dir:    {}", config.data_dir);
    Ok(())
}

/// Apply the given overrides and write the config back to disk.
pub fn set(
    mut config: ClientConfig,
    path: &Path,
    server: Option<String>,
    data_dir: Option<String>,
) -> Result<()> {
    if server.is_none() && data_dir.is_none() {
        anyhow::bail!("Nothing to set. Pass --server and/or --data-dir.");
    }
    if let Some(server) = server {
        config.server = server;
    }
    if let Some(data_dir) = data_dir {
        config.data_dir = data_dir;
    }
    config.save(path)?;
    println!("Config written to {}", path.display());
    Ok(())
}
