use std::sync::{Arc, RwLock};

use tracing::{error, warn};
use uuid::Uuid;

use crate::storage::{FileStore, StorageError};
use crate::types::{HistoryFilter, IdentificationRecord};

const HISTORY_DOC: &str = "identification_history";

/// Identification history, most recent first.
pub struct HistoryRepository {
    store: Arc<FileStore>,
    records: RwLock<Vec<IdentificationRecord>>,
}

impl HistoryRepository {
    /// Open the repository, loading any previously persisted history. A file
    /// that was never written means an empty history; a file that cannot be
    /// read or parsed is logged and treated the same way.
    pub fn open(store: Arc<FileStore>) -> Self {
        let records = match store.load::<Vec<IdentificationRecord>>(HISTORY_DOC) {
            Ok(records) => records,
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => {
                warn!("failed to load identification history, starting empty: {}", e);
                Vec::new()
            }
        };
        Self {
            store,
            records: RwLock::new(records),
        }
    }

    /// Prepend a record and persist the collection. The in-memory insert
    /// sticks even when the save fails; the error is logged and returned.
    pub fn insert(&self, record: IdentificationRecord) -> Result<(), StorageError> {
        let snapshot = {
            let mut records = self.records.write().expect("history lock poisoned");
            records.insert(0, record);
            records.clone()
        };
        self.persist(&snapshot)
    }

    /// Replace the record sharing `record.id` wholesale. Unknown ids are a
    /// no-op and nothing is persisted. Returns whether a record was replaced.
    pub fn update(&self, record: IdentificationRecord) -> Result<bool, StorageError> {
        let snapshot = {
            let mut records = self.records.write().expect("history lock poisoned");
            match records.iter_mut().find(|r| r.id == record.id) {
                Some(slot) => *slot = record,
                None => return Ok(false),
            }
            records.clone()
        };
        self.persist(&snapshot)?;
        Ok(true)
    }

    /// Remove a record by id and persist, whether or not the id was present.
    /// Returns whether it was.
    pub fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let (existed, snapshot) = {
            let mut records = self.records.write().expect("history lock poisoned");
            let before = records.len();
            records.retain(|r| r.id != id);
            (records.len() < before, records.clone())
        };
        self.persist(&snapshot)?;
        Ok(existed)
    }

    /// Read-only filtered view over the current ordering.
    pub fn list(&self, filter: HistoryFilter) -> Vec<IdentificationRecord> {
        let records = self.records.read().expect("history lock poisoned");
        match filter {
            HistoryFilter::All => records.clone(),
            HistoryFilter::InvasiveOnly => {
                records.iter().filter(|r| r.is_invasive).cloned().collect()
            }
            HistoryFilter::ReportedOnly => {
                records.iter().filter(|r| r.was_reported).cloned().collect()
            }
        }
    }

    /// The `limit` most recent records.
    pub fn recent(&self, limit: usize) -> Vec<IdentificationRecord> {
        let records = self.records.read().expect("history lock poisoned");
        records.iter().take(limit).cloned().collect()
    }

    pub fn get(&self, id: Uuid) -> Option<IdentificationRecord> {
        let records = self.records.read().expect("history lock poisoned");
        records.iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().expect("history lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&self, snapshot: &[IdentificationRecord]) -> Result<(), StorageError> {
        if let Err(e) = self.store.save(&snapshot, HISTORY_DOC) {
            error!("failed to persist identification history: {}", e);
            return Err(e);
        }
        Ok(())
    }
}
