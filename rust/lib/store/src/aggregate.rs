//! Dashboard aggregates, recomputed by full scans of all four collections
//! on every call. The dataset is small by construction (a single shop's
//! ledger), so no incremental bookkeeping is kept.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use seedstock_core::ExpiryAction;

use crate::snapshot::Snapshot;

/// Fixed-price profit model: every outward kg sells at this price.
pub const SALE_PRICE_PER_KG: f64 = 100.0;
/// ...and every inward kg was bought at this cost.
pub const COST_PRICE_PER_KG: f64 = 70.0;

/// Net stock at or below this is critical.
pub const CRITICAL_STOCK_KG: f64 = 5.0;
/// Net stock at or below this (but above critical) is low.
pub const LOW_STOCK_KG: f64 = 15.0;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindTotals {
    pub inward: f64,
    pub outward: f64,
    pub returns: f64,
    pub expiry: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSummary {
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    /// Gross margin percentage, one decimal. Zero when there is no revenue.
    pub margin: f64,
}

/// Monthly quantity series keyed by calendar month (January = index 0)
/// regardless of year.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySeries {
    pub inward: [f64; 12],
    pub outward: [f64; 12],
}

impl Default for MonthlySeries {
    fn default() -> Self {
        Self {
            inward: [0.0; 12],
            outward: [0.0; 12],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartyTotal {
    pub party: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryBreakdown {
    pub used: f64,
    pub destroyed: f64,
    pub returned: f64,
}

/// Everything the dashboard and reports derive from the dataset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub totals: KindTotals,

    /// Per-seed net stock: inward + returns - outward. Sorted by seed name
    /// for stable output.
    pub net_stock: BTreeMap<String, f64>,

    pub profit: ProfitSummary,

    pub monthly: MonthlySeries,

    /// Top 5 outward parties by quantity, descending.
    pub top_parties: Vec<PartyTotal>,

    pub expiry_breakdown: ExpiryBreakdown,
}

/// Recompute the full summary from scratch.
pub fn aggregate(snapshot: &Snapshot) -> DashboardSummary {
    let mut summary = DashboardSummary::default();

    for entry in &snapshot.inward {
        summary.totals.inward += entry.quantity;
        *summary.net_stock.entry(entry.seed_name.clone()).or_default() += entry.quantity;
        summary.monthly.inward[entry.date.month0() as usize] += entry.quantity;
    }

    let mut party_totals: BTreeMap<String, f64> = BTreeMap::new();
    for entry in &snapshot.outward {
        summary.totals.outward += entry.quantity;
        *summary.net_stock.entry(entry.seed_name.clone()).or_default() -= entry.quantity;
        summary.monthly.outward[entry.date.month0() as usize] += entry.quantity;
        if let Some(party) = &entry.party {
            *party_totals.entry(party.clone()).or_default() += entry.quantity;
        }
    }

    for entry in &snapshot.returns {
        summary.totals.returns += entry.quantity;
        *summary.net_stock.entry(entry.seed_name.clone()).or_default() += entry.quantity;
    }

    for entry in &snapshot.expiry {
        summary.totals.expiry += entry.quantity;
        match entry.action {
            Some(ExpiryAction::Used) => summary.expiry_breakdown.used += entry.quantity,
            Some(ExpiryAction::Destroyed) => summary.expiry_breakdown.destroyed += entry.quantity,
            Some(ExpiryAction::Returned) => summary.expiry_breakdown.returned += entry.quantity,
            None => {}
        }
    }

    summary.profit.revenue = summary.totals.outward * SALE_PRICE_PER_KG;
    summary.profit.costs = summary.totals.inward * COST_PRICE_PER_KG;
    summary.profit.profit = summary.profit.revenue - summary.profit.costs;
    summary.profit.margin = if summary.profit.revenue > 0.0 {
        (summary.profit.profit / summary.profit.revenue * 1000.0).round() / 10.0
    } else {
        0.0
    };

    let mut parties: Vec<PartyTotal> = party_totals
        .into_iter()
        .map(|(party, quantity)| PartyTotal { party, quantity })
        .collect();
    parties.sort_by(|a, b| b.quantity.total_cmp(&a.quantity));
    parties.truncate(5);
    summary.top_parties = parties;

    summary
}

/// Stock health bands for the low-stock check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Critical,
    Low,
    Ok,
}

impl StockLevel {
    pub fn classify(stock: f64) -> StockLevel {
        if stock <= CRITICAL_STOCK_KG {
            StockLevel::Critical
        } else if stock <= LOW_STOCK_KG {
            StockLevel::Low
        } else {
            StockLevel::Ok
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockAlert {
    pub seed_name: String,
    pub stock: f64,
    pub level: StockLevel,
}

/// Seeds whose net stock is at or below the low threshold, critical first.
/// Evaluated by the caller on a fixed interval, not per mutation.
pub fn low_stock_alerts(snapshot: &Snapshot) -> Vec<LowStockAlert> {
    let summary = aggregate(snapshot);
    let mut alerts: Vec<LowStockAlert> = summary
        .net_stock
        .into_iter()
        .filter_map(|(seed_name, stock)| match StockLevel::classify(stock) {
            StockLevel::Ok => None,
            level => Some(LowStockAlert {
                seed_name,
                stock,
                level,
            }),
        })
        .collect();
    alerts.sort_by(|a, b| {
        (a.level != StockLevel::Critical)
            .cmp(&(b.level != StockLevel::Critical))
            .then(a.stock.total_cmp(&b.stock))
    });
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use seedstock_core::{Entry, Kind};

    fn entry(kind: Kind, seed: &str, qty: f64, date: &str) -> Entry {
        Entry {
            id: seedstock_core::new_id(),
            seed_name: seed.into(),
            quantity: qty,
            date: date.parse::<NaiveDate>().unwrap(),
            party: match kind {
                Kind::Inward => Some("AgriCo".into()),
                Kind::Outward => Some("Sharma Seeds".into()),
                _ => None,
            },
            reason: (kind == Kind::Returns).then(|| "damaged".to_string()),
            expiry_date: None,
            action: (kind == Kind::Expiry).then_some(seedstock_core::ExpiryAction::Used),
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn net_stock_and_fixed_price_model() {
        let snapshot = Snapshot {
            inward: vec![entry(Kind::Inward, "Wheat", 100.0, "2025-01-10")],
            outward: vec![entry(Kind::Outward, "Wheat", 30.0, "2025-02-15")],
            ..Default::default()
        };
        let summary = aggregate(&snapshot);
        assert_eq!(summary.net_stock["Wheat"], 70.0);
        assert_eq!(summary.profit.revenue, 30.0 * 100.0);
        assert_eq!(summary.profit.costs, 100.0 * 70.0);
        assert_eq!(summary.profit.profit, -4000.0);
    }

    #[test]
    fn returns_add_back_to_stock() {
        let snapshot = Snapshot {
            inward: vec![entry(Kind::Inward, "Corn", 20.0, "2025-01-10")],
            outward: vec![entry(Kind::Outward, "Corn", 15.0, "2025-01-20")],
            returns: vec![entry(Kind::Returns, "Corn", 5.0, "2025-01-25")],
            ..Default::default()
        };
        assert_eq!(aggregate(&snapshot).net_stock["Corn"], 10.0);
    }

    #[test]
    fn margin_is_zero_without_revenue() {
        let snapshot = Snapshot {
            inward: vec![entry(Kind::Inward, "Corn", 20.0, "2025-01-10")],
            ..Default::default()
        };
        assert_eq!(aggregate(&snapshot).profit.margin, 0.0);
    }

    #[test]
    fn margin_rounds_to_one_decimal() {
        let snapshot = Snapshot {
            inward: vec![entry(Kind::Inward, "Corn", 10.0, "2025-01-10")],
            outward: vec![entry(Kind::Outward, "Corn", 9.0, "2025-02-10")],
            ..Default::default()
        };
        // revenue 900, costs 700, profit 200 => 22.2%
        assert_eq!(aggregate(&snapshot).profit.margin, 22.2);
    }

    #[test]
    fn monthly_buckets_ignore_year() {
        let snapshot = Snapshot {
            inward: vec![
                entry(Kind::Inward, "Wheat", 10.0, "2024-03-01"),
                entry(Kind::Inward, "Wheat", 5.0, "2025-03-20"),
            ],
            outward: vec![entry(Kind::Outward, "Wheat", 4.0, "2025-12-31")],
            ..Default::default()
        };
        let monthly = aggregate(&snapshot).monthly;
        assert_eq!(monthly.inward[2], 15.0); // March, both years
        assert_eq!(monthly.outward[11], 4.0);
        assert_eq!(monthly.inward.iter().sum::<f64>(), 15.0);
    }

    #[test]
    fn top_parties_ranked_and_capped() {
        let mut outward = Vec::new();
        for (party, qty) in [
            ("P1", 10.0),
            ("P2", 50.0),
            ("P3", 20.0),
            ("P4", 5.0),
            ("P5", 40.0),
            ("P6", 30.0),
        ] {
            let mut e = entry(Kind::Outward, "Wheat", qty, "2025-01-01");
            e.party = Some(party.into());
            outward.push(e);
        }
        let snapshot = Snapshot {
            outward,
            ..Default::default()
        };
        let top = aggregate(&snapshot).top_parties;
        assert_eq!(top.len(), 5);
        assert_eq!(top[0], PartyTotal { party: "P2".into(), quantity: 50.0 });
        assert_eq!(top[4], PartyTotal { party: "P1".into(), quantity: 10.0 });
    }

    #[test]
    fn stock_levels() {
        assert_eq!(StockLevel::classify(-2.0), StockLevel::Critical);
        assert_eq!(StockLevel::classify(5.0), StockLevel::Critical);
        assert_eq!(StockLevel::classify(5.1), StockLevel::Low);
        assert_eq!(StockLevel::classify(15.0), StockLevel::Low);
        assert_eq!(StockLevel::classify(15.1), StockLevel::Ok);
    }

    #[test]
    fn low_stock_alerts_critical_first() {
        let snapshot = Snapshot {
            inward: vec![
                entry(Kind::Inward, "Wheat", 12.0, "2025-01-01"),
                entry(Kind::Inward, "Corn", 3.0, "2025-01-01"),
                entry(Kind::Inward, "Rice", 100.0, "2025-01-01"),
            ],
            ..Default::default()
        };
        let alerts = low_stock_alerts(&snapshot);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].seed_name, "Corn");
        assert_eq!(alerts[0].level, StockLevel::Critical);
        assert_eq!(alerts[1].seed_name, "Wheat");
        assert_eq!(alerts[1].level, StockLevel::Low);
    }
}
