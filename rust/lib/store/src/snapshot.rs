use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use seedstock_core::{Entry, Kind};

use crate::error::StoreError;

/// The full dataset: all four collections, serialized as one document.
/// Every mutation rewrites the whole snapshot, not an incremental diff.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub inward: Vec<Entry>,
    #[serde(default)]
    pub outward: Vec<Entry>,
    #[serde(default)]
    pub returns: Vec<Entry>,
    #[serde(default)]
    pub expiry: Vec<Entry>,
}

impl Snapshot {
    pub fn collection(&self, kind: Kind) -> &Vec<Entry> {
        match kind {
            Kind::Inward => &self.inward,
            Kind::Outward => &self.outward,
            Kind::Returns => &self.returns,
            Kind::Expiry => &self.expiry,
        }
    }

    pub fn collection_mut(&mut self, kind: Kind) -> &mut Vec<Entry> {
        match kind {
            Kind::Inward => &mut self.inward,
            Kind::Outward => &mut self.outward,
            Kind::Returns => &mut self.returns,
            Kind::Expiry => &mut self.expiry,
        }
    }
}

/// Durable backing for the snapshot. Injected into the store so tests can
/// substitute an in-memory implementation.
pub trait SnapshotPort: Send + Sync {
    /// Load the last persisted snapshot, or `None` when nothing was ever
    /// persisted.
    fn load(&self) -> Result<Option<Snapshot>, StoreError>;

    /// Persist the whole snapshot.
    fn store(&self, snapshot: &Snapshot) -> Result<(), StoreError>;
}

/// Snapshot persisted as a single JSON file. Writes go to a temp file in
/// the same directory and are renamed into place, so a crash mid-write
/// never truncates the previous snapshot.
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotPort for FileSnapshot {
    fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Persist(e.to_string()))?;
        let snapshot = serde_json::from_str(&content)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        Ok(Some(snapshot))
    }

    fn store(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Persist(e.to_string()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| StoreError::Persist(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| StoreError::Persist(e.to_string()))?;
        Ok(())
    }
}

/// In-memory snapshot port for tests.
#[derive(Default)]
pub struct MemorySnapshot {
    inner: Mutex<Option<Snapshot>>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last snapshot written, if any. Lets tests assert that a
    /// mutation actually persisted.
    pub fn stored(&self) -> Option<Snapshot> {
        self.inner.lock().ok().and_then(|g| g.clone())
    }
}

impl SnapshotPort for MemorySnapshot {
    fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        Ok(self
            .inner
            .lock()
            .map_err(|e| StoreError::Persist(e.to_string()))?
            .clone())
    }

    fn store(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        *self
            .inner
            .lock()
            .map_err(|e| StoreError::Persist(e.to_string()))? = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: &str) -> Entry {
        Entry {
            id: id.into(),
            seed_name: "Wheat".into(),
            quantity: 10.0,
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            party: Some("AgriCo".into()),
            reason: None,
            expiry_date: None,
            action: None,
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn file_snapshot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let port = FileSnapshot::new(dir.path().join("inventory.json"));
        assert!(port.load().unwrap().is_none());

        let mut snap = Snapshot::default();
        snap.collection_mut(Kind::Inward).push(entry("1"));
        port.store(&snap).unwrap();

        let back = port.load().unwrap().unwrap();
        assert_eq!(back.inward.len(), 1);
        assert_eq!(back.inward[0].id, "1");
    }

    #[test]
    fn file_snapshot_overwrites_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let port = FileSnapshot::new(dir.path().join("inventory.json"));

        let mut snap = Snapshot::default();
        snap.inward.push(entry("1"));
        snap.inward.push(entry("2"));
        port.store(&snap).unwrap();

        snap.inward.clear();
        port.store(&snap).unwrap();
        assert!(port.load().unwrap().unwrap().inward.is_empty());
    }
}
