//! `seedstockd` — the seed inventory server binary.
//!
//! Usage:
//!   seedstockd [-c <name-or-path>] [--listen <addr>]
//!
//! A bare config name resolves to `/etc/seedstock/<name>.toml`; without
//! `-c` the built-in defaults apply (data under ./data).

mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use seedstock_core::Module;
use tracing::info;

use config::ServerConfig;

/// Seed inventory server.
#[derive(Parser, Debug)]
#[command(name = "seedstockd", about = "Seed inventory server")]
struct Cli {
    /// Config name or path to config file.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Listen address (overrides the config file).
    #[arg(long = "listen")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let server_config = match &cli.config {
        Some(name) => {
            let config_path = ServerConfig::resolve_path(name);
            info!("Loading configuration from {}", config_path.display());
            ServerConfig::load(&config_path)?
        }
        None => ServerConfig::default(),
    };
    let listen = cli.listen.unwrap_or_else(|| server_config.server.listen.clone());

    std::fs::create_dir_all(&server_config.storage.data_dir)?;
    let sql: Arc<dyn seedstock_sql::SQLStore> = Arc::new(
        seedstock_sql::SqliteStore::open(&server_config.resolve_sqlite_path())
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );

    let inventory_module = inventory::InventoryModule::new(
        inventory::service::InventoryService::new(Arc::clone(&sql))
            .map_err(|e| anyhow::anyhow!("failed to initialize inventory: {}", e))?,
    );
    info!("Inventory module initialized");

    let module_routes = vec![(inventory_module.name(), inventory_module.routes())];
    let app = routes::build_router(module_routes);

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    info!("seedstockd listening on {}", listen);
    axum::serve(listener, app).await?;

    Ok(())
}
