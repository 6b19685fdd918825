//! Local ledger commands: add, update, delete, list.

use anyhow::Result;
use seedstock_core::{Entry, EntryDraft, ExpiryAction, Kind};
use seedstock_store::{EntryFilter, FileSnapshot, InventoryStore, category_values};

use crate::config::ClientConfig;

/// Open the ledger, creating the data directory on first use.
pub fn open_store(config: &ClientConfig) -> Result<InventoryStore> {
    let path = config.ledger_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(InventoryStore::open(Box::new(FileSnapshot::new(path)))?)
}

pub fn add(kind: Kind, draft: EntryDraft, config: &ClientConfig) -> Result<()> {
    let mut store = open_store(config)?;
    let entry = store.save(kind, draft)?;
    println!("{} entry added: {}", kind.label(), entry.id);
    Ok(())
}

pub fn update(kind: Kind, id: &str, draft: EntryDraft, config: &ClientConfig) -> Result<()> {
    let mut store = open_store(config)?;
    if !store.update(kind, id, draft)? {
        anyhow::bail!("Entry not found: {}", id);
    }
    println!("{} entry updated: {}", kind.label(), id);
    Ok(())
}

pub fn delete(kind: Kind, id: &str, config: &ClientConfig) -> Result<()> {
    let mut store = open_store(config)?;
    if !store.delete(kind, id)? {
        anyhow::bail!("Entry not found: {}", id);
    }
    println!("{} entry deleted: {}", kind.label(), id);
    Ok(())
}

pub fn list(
    kind: Kind,
    filter: &EntryFilter,
    json_output: bool,
    config: &ClientConfig,
) -> Result<()> {
    let store = open_store(config)?;
    let entries = store.filter(kind, filter);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No {} entries.", kind.as_str());
        return Ok(());
    }

    let category = category_header(kind);
    println!(
        "{:10} {:20} {:>10} {:12} {:20} {}",
        "ID", "SEED", "QTY (KG)", "DATE", category, "NOTES"
    );
    for entry in entries {
        println!(
            "{:10} {:20} {:>10} {:12} {:20} {}",
            short_id(&entry.id),
            entry.seed_name,
            entry.quantity,
            entry.date,
            category_value(kind, entry),
            entry.notes.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}

/// Print the distinct categorical values of a kind (suppliers, customers,
/// reasons or actions), in first-seen order.
pub fn categories(kind: Kind, config: &ClientConfig) -> Result<()> {
    let store = open_store(config)?;
    for value in category_values(kind, store.entries(kind)) {
        println!("{}", value);
    }
    Ok(())
}

fn category_header(kind: Kind) -> &'static str {
    match kind {
        Kind::Inward => "SUPPLIER",
        Kind::Outward => "CUSTOMER",
        Kind::Returns => "REASON",
        Kind::Expiry => "ACTION",
    }
}

fn category_value(kind: Kind, entry: &Entry) -> String {
    match kind {
        Kind::Inward | Kind::Outward => entry.party.clone().unwrap_or_default(),
        Kind::Returns => entry.reason.clone().unwrap_or_default(),
        Kind::Expiry => entry
            .action
            .map(|a| a.as_str())
            .unwrap_or_default()
            .to_string(),
    }
}

fn short_id(id: &str) -> &str {
    if id.len() > 8 { &id[..8] } else { id }
}

pub fn parse_action(s: &str) -> Result<ExpiryAction> {
    match s {
        "used" => Ok(ExpiryAction::Used),
        "destroyed" => Ok(ExpiryAction::Destroyed),
        "returned" => Ok(ExpiryAction::Returned),
        _ => anyhow::bail!("Unknown action \"{}\" (expected used, destroyed or returned).", s),
    }
}
