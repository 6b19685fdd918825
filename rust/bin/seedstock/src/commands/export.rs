//! CSV export and printable HTML reports from the local ledger.

use std::path::Path;

use anyhow::Result;
use seedstock_core::Kind;
use seedstock_store::{to_csv, to_html_report};

use crate::commands::entry::open_store;
use crate::config::ClientConfig;

pub fn export(kind: Kind, out: Option<&Path>, config: &ClientConfig) -> Result<()> {
    let store = open_store(config)?;
    let csv = to_csv(kind, store.entries(kind))?;
    write_out(&csv, out, "CSV")
}

pub fn report(kind: Kind, out: Option<&Path>, config: &ClientConfig) -> Result<()> {
    let store = open_store(config)?;
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    let html = to_html_report(kind, store.entries(kind), &generated_at);
    write_out(&html, out, "Report")
}

fn write_out(content: &str, out: Option<&Path>, what: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content)?;
            println!("{} written to {}", what, path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
