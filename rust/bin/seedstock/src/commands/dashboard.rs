//! Dashboard aggregates and the low-stock watch loop.

use std::time::Duration;

use anyhow::Result;
use seedstock_store::StockLevel;

use crate::commands::entry::open_store;
use crate::config::ClientConfig;

pub fn dashboard(json_output: bool, config: &ClientConfig) -> Result<()> {
    let store = open_store(config)?;
    let summary = store.aggregate();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Totals (kg)");
    println!("  inward:  {}", summary.totals.inward);
    println!("  outward: {}", summary.totals.outward);
    println!("  returns: {}", summary.totals.returns);
    println!("  expiry:  {}", summary.totals.expiry);

    println!("\nProfit");
    println!("  revenue: {}", summary.profit.revenue);
    println!("  costs:   {}", summary.profit.costs);
    println!("  profit:  {}", summary.profit.profit);
    println!("  margin:  {}%", summary.profit.margin);

    if !summary.net_stock.is_empty() {
        println!("\nNet stock (kg)");
        for (seed, stock) in &summary.net_stock {
            println!("  {:20} {:>10}", seed, stock);
        }
    }

    if !summary.top_parties.is_empty() {
        println!("\nTop customers");
        for p in &summary.top_parties {
            println!("  {:20} {:>10}", p.party, p.quantity);
        }
    }

    let alerts = store.low_stock_alerts();
    if !alerts.is_empty() {
        println!("\nLow stock");
        for alert in alerts {
            println!("  {} {:20} {:>10} kg", marker(alert.level), alert.seed_name, alert.stock);
        }
    }

    Ok(())
}

/// Re-evaluate low-stock alerts on a fixed interval until interrupted.
pub fn watch(interval_secs: u64, config: &ClientConfig) -> Result<()> {
    println!("Checking stock every {}s (Ctrl-C to stop).", interval_secs);
    loop {
        // Reopen each tick to pick up ledger changes from other processes.
        let store = open_store(config)?;
        let alerts = store.low_stock_alerts();
        let now = chrono::Local::now().format("%H:%M:%S");
        if alerts.is_empty() {
            println!("[{}] stock ok", now);
        } else {
            for alert in alerts {
                println!(
                    "[{}] {} {} is down to {} kg",
                    now,
                    marker(alert.level),
                    alert.seed_name,
                    alert.stock
                );
            }
        }
        std::thread::sleep(Duration::from_secs(interval_secs));
    }
}

fn marker(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Critical => "CRITICAL",
        StockLevel::Low => "LOW",
        StockLevel::Ok => "ok",
    }
}
