use seedstock_core::{Entry, EntryDraft, Kind, new_id, now_rfc3339};
use tracing::debug;

use crate::aggregate::{self, DashboardSummary, LowStockAlert};
use crate::error::StoreError;
use crate::filter::EntryFilter;
use crate::snapshot::{Snapshot, SnapshotPort};
use crate::validate;

/// The client store: four in-memory collections plus an injected
/// persistence port. Every successful mutation rewrites the whole
/// snapshot through the port before returning.
///
/// This store and the server's database are two independent copies;
/// nothing here reconciles them.
pub struct InventoryStore {
    snapshot: Snapshot,
    port: Box<dyn SnapshotPort>,
}

impl InventoryStore {
    /// Open the store, loading the last persisted snapshot if any.
    pub fn open(port: Box<dyn SnapshotPort>) -> Result<Self, StoreError> {
        let snapshot = port.load()?.unwrap_or_default();
        Ok(Self { snapshot, port })
    }

    /// Validate a draft, assign a fresh id and timestamp, insert it at the
    /// front of the kind's collection and persist. Returns the new entry.
    pub fn save(&mut self, kind: Kind, draft: EntryDraft) -> Result<Entry, StoreError> {
        let errors = validate::validate(kind, &draft);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let entry = draft.into_entry(new_id(), now_rfc3339());
        self.snapshot.collection_mut(kind).insert(0, entry.clone());
        if let Err(e) = self.persist() {
            // Roll the insert back so a failed persist leaves no partial state.
            self.snapshot.collection_mut(kind).remove(0);
            return Err(e);
        }
        debug!(kind = %kind, id = %entry.id, "entry saved");
        Ok(entry)
    }

    /// Replace every field except `id` of the matching record. Returns
    /// `Ok(false)` (a no-op, not an error) when the id is absent.
    pub fn update(&mut self, kind: Kind, id: &str, draft: EntryDraft) -> Result<bool, StoreError> {
        let errors = validate::validate(kind, &draft);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let Some(index) = self
            .snapshot
            .collection(kind)
            .iter()
            .position(|e| e.id == id)
        else {
            return Ok(false);
        };

        let previous = self.snapshot.collection(kind)[index].clone();
        let created_at = previous.created_at.clone().unwrap_or_else(now_rfc3339);
        self.snapshot.collection_mut(kind)[index] = draft.into_entry(id.to_string(), created_at);

        if let Err(e) = self.persist() {
            self.snapshot.collection_mut(kind)[index] = previous;
            return Err(e);
        }
        debug!(kind = %kind, id, "entry updated");
        Ok(true)
    }

    /// Remove the record by id. Idempotent: a second call for the same id
    /// is a no-op returning `Ok(false)`.
    pub fn delete(&mut self, kind: Kind, id: &str) -> Result<bool, StoreError> {
        let Some(index) = self
            .snapshot
            .collection(kind)
            .iter()
            .position(|e| e.id == id)
        else {
            return Ok(false);
        };

        let removed = self.snapshot.collection_mut(kind).remove(index);
        if let Err(e) = self.persist() {
            self.snapshot.collection_mut(kind).insert(index, removed);
            return Err(e);
        }
        debug!(kind = %kind, id, "entry deleted");
        Ok(true)
    }

    pub fn get(&self, kind: Kind, id: &str) -> Option<&Entry> {
        self.snapshot.collection(kind).iter().find(|e| e.id == id)
    }

    /// The kind's collection in insertion order (newest first).
    pub fn entries(&self, kind: Kind) -> &[Entry] {
        self.snapshot.collection(kind)
    }

    /// A filtered view of the kind's collection. All predicates AND.
    pub fn filter(&self, kind: Kind, filter: &EntryFilter) -> Vec<&Entry> {
        self.snapshot
            .collection(kind)
            .iter()
            .filter(|e| filter.matches(kind, e))
            .collect()
    }

    /// Recompute all dashboard aggregates by full scan.
    pub fn aggregate(&self) -> DashboardSummary {
        aggregate::aggregate(&self.snapshot)
    }

    pub fn low_stock_alerts(&self) -> Vec<LowStockAlert> {
        aggregate::low_stock_alerts(&self.snapshot)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.port.store(&self.snapshot)
    }
}
