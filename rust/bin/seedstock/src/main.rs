//! `seedstock` — the seed inventory CLI client.
//!
//! Bookkeeping happens against a local JSON ledger under ~/.seedstock;
//! `sync` and `status` talk to a seedstockd server when one is configured.

mod commands;
mod config;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use seedstock_core::{EntryDraft, Kind};
use seedstock_store::EntryFilter;

use config::ClientConfig;

/// Seed inventory CLI.
#[derive(Parser, Debug)]
#[command(name = "seedstock", about = "Seed inventory CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.seedstock/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct EntryFields {
    #[arg(long = "seed-name")]
    seed_name: Option<String>,

    /// Quantity in kg.
    #[arg(long)]
    quantity: Option<f64>,

    /// Movement date (YYYY-MM-DD).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Supplier (inward) or customer (outward).
    #[arg(long)]
    party: Option<String>,

    /// Return reason (returns only).
    #[arg(long)]
    reason: Option<String>,

    /// Expiry date (expiry only, YYYY-MM-DD).
    #[arg(long = "expiry-date")]
    expiry_date: Option<NaiveDate>,

    /// What happened to the lot: used, destroyed or returned (expiry only).
    #[arg(long)]
    action: Option<String>,

    #[arg(long)]
    notes: Option<String>,
}

impl EntryFields {
    fn into_draft(self) -> Result<EntryDraft> {
        Ok(EntryDraft {
            seed_name: self.seed_name,
            quantity: self.quantity,
            date: self.date,
            party: self.party,
            reason: self.reason,
            expiry_date: self.expiry_date,
            action: self
                .action
                .as_deref()
                .map(commands::entry::parse_action)
                .transpose()?,
            notes: self.notes,
        })
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add an entry to the local ledger.
    Add {
        /// Entry kind: inward, outward, returns or expiry.
        kind: String,
        #[command(flatten)]
        fields: EntryFields,
    },

    /// Replace an entry's fields (everything except the id).
    Update {
        kind: String,
        id: String,
        #[command(flatten)]
        fields: EntryFields,
    },

    /// Delete an entry.
    Delete {
        kind: String,
        id: String,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List entries, optionally filtered.
    List {
        kind: String,
        /// Case-insensitive substring matched against every field.
        #[arg(long)]
        search: Option<String>,
        /// Exact match on supplier/customer/reason/action.
        #[arg(long)]
        category: Option<String>,
        /// Inclusive start of the date range (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Inclusive end of the date range (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Print the kind's distinct category values instead of entries.
        #[arg(long)]
        categories: bool,
    },

    /// Show dashboard aggregates and low-stock alerts.
    Dashboard,

    /// Re-check low stock on a fixed interval.
    Watch {
        /// Seconds between checks.
        #[arg(long, default_value_t = 30)]
        interval: u64,
    },

    /// Export a kind's entries as CSV.
    Export {
        kind: String,
        /// Write to a file instead of stdout.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
    },

    /// Render a printable HTML report for a kind.
    Report {
        kind: String,
        /// Write to a file instead of stdout.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
    },

    /// Login with the shop credentials.
    Login {
        /// Username.
        #[arg(long)]
        user: Option<String>,
        /// Password (not recommended — use the interactive prompt).
        #[arg(long)]
        password: Option<String>,
    },

    /// Logout — clear the recorded session.
    Logout,

    /// Set or toggle the UI theme (light/dark).
    Theme { value: Option<String> },

    /// Show or change the client configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Push every local entry to the configured server.
    Sync,

    /// Check server status.
    Status,

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration and where it lives.
    Show,

    /// Update configuration values and write them back.
    Set {
        /// Server URL for sync/status (e.g. http://localhost:3000).
        #[arg(long)]
        server: Option<String>,

        /// Directory holding the ledger and preferences.
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
}

fn parse_kind(s: &str) -> Result<Kind> {
    Kind::parse(s).ok_or_else(|| {
        anyhow::anyhow!("Unknown kind \"{}\" (expected inward, outward, returns or expiry).", s)
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(ClientConfig::default_path);
    let config = ClientConfig::load(&config_path)?;
    let json_output = cli.output == "json";

    match cli.command {
        Commands::Add { kind, fields } => {
            let kind = parse_kind(&kind)?;
            commands::entry::add(kind, fields.into_draft()?, &config)?;
        }

        Commands::Update { kind, id, fields } => {
            let kind = parse_kind(&kind)?;
            commands::entry::update(kind, &id, fields.into_draft()?, &config)?;
        }

        Commands::Delete { kind, id, yes } => {
            let kind = parse_kind(&kind)?;
            if !yes {
                eprint!("Are you sure? [y/N]: ");
                let mut s = String::new();
                std::io::stdin().read_line(&mut s)?;
                if !s.trim().eq_ignore_ascii_case("y") {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            commands::entry::delete(kind, &id, &config)?;
        }

        Commands::List {
            kind,
            search,
            category,
            from,
            to,
            categories,
        } => {
            let kind = parse_kind(&kind)?;
            if categories {
                commands::entry::categories(kind, &config)?;
            } else {
                let filter = EntryFilter {
                    search,
                    category,
                    from,
                    to,
                };
                commands::entry::list(kind, &filter, json_output, &config)?;
            }
        }

        Commands::Dashboard => {
            commands::dashboard::dashboard(json_output, &config)?;
        }

        Commands::Watch { interval } => {
            commands::dashboard::watch(interval, &config)?;
        }

        Commands::Export { kind, file } => {
            let kind = parse_kind(&kind)?;
            commands::export::export(kind, file.as_deref().map(std::path::Path::new), &config)?;
        }

        Commands::Report { kind, file } => {
            let kind = parse_kind(&kind)?;
            commands::export::report(kind, file.as_deref().map(std::path::Path::new), &config)?;
        }

        Commands::Login { user, password } => {
            let username = user.unwrap_or_else(|| {
                eprint!("Username: ");
                let mut s = String::new();
                std::io::stdin().read_line(&mut s).unwrap_or_default();
                s.trim().to_string()
            });
            let password = password
                .unwrap_or_else(|| rpassword::prompt_password("Password: ").unwrap_or_default());
            commands::login::login(&username, &password, &config)?;
        }

        Commands::Logout => {
            commands::login::logout(&config)?;
        }

        Commands::Theme { value } => {
            commands::login::theme(value.as_deref(), &config)?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::show(&config, &config_path)?;
            }
            ConfigAction::Set { server, data_dir } => {
                commands::config::set(config, &config_path, server, data_dir)?;
            }
        },

        Commands::Sync => {
            commands::remote::sync(&config)?;
        }

        Commands::Status => {
            commands::remote::status(&config)?;
        }

        Commands::Version => {
            println!("seedstock cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
