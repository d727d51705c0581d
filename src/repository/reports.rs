use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use tracing::{error, warn};
use uuid::Uuid;

use crate::storage::{FileStore, StorageError};
use crate::types::ReportRecord;

const REPORTS_DOC: &str = "reports";

/// Filed invasive-species reports, most recent first. Reports are immutable
/// once inserted; the only mutations are insert and delete.
pub struct ReportRepository {
    store: Arc<FileStore>,
    reports: RwLock<Vec<ReportRecord>>,
}

impl ReportRepository {
    /// Open the repository, loading any previously persisted reports. Missing
    /// or unreadable files start an empty collection.
    pub fn open(store: Arc<FileStore>) -> Self {
        let reports = match store.load::<Vec<ReportRecord>>(REPORTS_DOC) {
            Ok(reports) => reports,
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => {
                warn!("failed to load reports, starting empty: {}", e);
                Vec::new()
            }
        };
        Self {
            store,
            reports: RwLock::new(reports),
        }
    }

    /// Prepend a report and persist. The in-memory insert sticks even when
    /// the save fails; the error is logged and returned.
    pub fn insert(&self, report: ReportRecord) -> Result<(), StorageError> {
        let snapshot = {
            let mut reports = self.reports.write().expect("reports lock poisoned");
            reports.insert(0, report);
            reports.clone()
        };
        self.persist(&snapshot)
    }

    /// Remove a report by id and persist, whether or not the id was present.
    pub fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let (existed, snapshot) = {
            let mut reports = self.reports.write().expect("reports lock poisoned");
            let before = reports.len();
            reports.retain(|r| r.id != id);
            (reports.len() < before, reports.clone())
        };
        self.persist(&snapshot)?;
        Ok(existed)
    }

    /// Read-only snapshot, most recent first.
    pub fn list(&self) -> Vec<ReportRecord> {
        self.reports.read().expect("reports lock poisoned").clone()
    }

    /// Coarse location buckets for display deduplication: reports within the
    /// same 0.01-degree cell (≈1.1 km) share a `"lat,lon"` key. Lossy by
    /// design — never use these keys for anything needing geodetic precision.
    pub fn unique_locations(&self) -> BTreeSet<String> {
        let reports = self.reports.read().expect("reports lock poisoned");
        reports
            .iter()
            .map(|r| format!("{:.2},{:.2}", r.latitude, r.longitude))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.reports.read().expect("reports lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&self, snapshot: &[ReportRecord]) -> Result<(), StorageError> {
        if let Err(e) = self.store.save(&snapshot, REPORTS_DOC) {
            error!("failed to persist reports: {}", e);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    fn temp_repo() -> (tempfile::TempDir, Arc<FileStore>, ReportRepository) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStore::open(dir.path()).unwrap());
        let repo = ReportRepository::open(store.clone());
        (dir, store, repo)
    }

    #[test]
    fn insert_prepends_and_list_reflects_it() {
        let (_dir, _store, repo) = temp_repo();
        let first = ReportRecord::new("水葫芦", "Eichhornia crassipes", 39.9, 116.4, Severity::High);
        let second =
            ReportRecord::new("薇甘菊", "Mikania micrantha", 22.5, 114.1, Severity::High);
        repo.insert(first.clone()).unwrap();
        repo.insert(second.clone()).unwrap();

        let all = repo.list();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
    }

    #[test]
    fn delete_shrinks_by_one_and_persists() {
        let (_dir, store, repo) = temp_repo();
        let report = ReportRecord::new("水葫芦", "Eichhornia crassipes", 39.9, 116.4, Severity::High);
        repo.insert(report.clone()).unwrap();
        assert!(repo.delete(report.id).unwrap());
        assert!(!repo.delete(report.id).unwrap());
        assert!(repo.is_empty());

        let reopened = ReportRepository::open(store);
        assert!(reopened.is_empty());
    }

    #[test]
    fn nearby_reports_collapse_into_one_location_bucket() {
        let (_dir, _store, repo) = temp_repo();
        repo.insert(ReportRecord::new(
            "水葫芦",
            "Eichhornia crassipes",
            39.9041,
            116.4073,
            Severity::High,
        ))
        .unwrap();
        repo.insert(ReportRecord::new(
            "水葫芦",
            "Eichhornia crassipes",
            39.9042,
            116.4074,
            Severity::High,
        ))
        .unwrap();

        let locations = repo.unique_locations();
        assert_eq!(locations.len(), 1);
        assert!(locations.contains("39.90,116.41"));
    }

    #[test]
    fn distant_reports_keep_distinct_buckets() {
        let (_dir, _store, repo) = temp_repo();
        repo.insert(ReportRecord::new(
            "水葫芦",
            "Eichhornia crassipes",
            39.9041,
            116.4073,
            Severity::High,
        ))
        .unwrap();
        repo.insert(ReportRecord::new(
            "薇甘菊",
            "Mikania micrantha",
            22.5431,
            114.0579,
            Severity::High,
        ))
        .unwrap();
        assert_eq!(repo.unique_locations().len(), 2);
    }

    #[test]
    fn failed_save_keeps_in_memory_insert() {
        let (_dir, store, repo) = temp_repo();
        // A directory squatting on the document path makes the rename fail.
        std::fs::create_dir(store.root().join("reports.json")).unwrap();

        let report = ReportRecord::new("水葫芦", "Eichhornia crassipes", 39.9, 116.4, Severity::High);
        assert!(repo.insert(report.clone()).is_err());
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.list()[0].id, report.id);
    }

    #[test]
    fn reports_survive_reopen_in_order() {
        let (_dir, store, repo) = temp_repo();
        let a = ReportRecord::new("a", "Aus aus", 1.0, 2.0, Severity::Low);
        let b = ReportRecord::new("b", "Bus bus", 3.0, 4.0, Severity::Medium);
        repo.insert(a.clone()).unwrap();
        repo.insert(b.clone()).unwrap();
        drop(repo);

        let reopened = ReportRepository::open(store);
        let all = reopened.list();
        assert_eq!(all, vec![b, a]);
    }
}
