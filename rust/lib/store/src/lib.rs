//! The client-side inventory store.
//!
//! Holds the four record collections in memory, mirrors the whole dataset
//! to an injected snapshot port on every mutation, and derives all
//! dashboard/report figures by full re-scan. Deliberately independent of
//! the server's copy of the data — there is no reconciliation protocol.

pub mod aggregate;
pub mod error;
pub mod export;
pub mod filter;
pub mod prefs;
pub mod snapshot;
pub mod store;
pub mod validate;

pub use aggregate::{DashboardSummary, LowStockAlert, StockLevel};
pub use error::StoreError;
pub use export::{to_csv, to_html_report};
pub use filter::{EntryFilter, category_values};
pub use prefs::{Preferences, Theme};
pub use snapshot::{FileSnapshot, MemorySnapshot, Snapshot, SnapshotPort};
pub use store::InventoryStore;
