//! Durable, ordered, filterable record repositories.
//!
//! Each repository owns its in-memory collection exclusively (most-recent
//! first) behind an `RwLock`: one writer at a time, readers get cloned
//! snapshots. After every mutation the full collection is written back through
//! [`FileStore`](crate::storage::FileStore). A failed write keeps the
//! in-memory state and returns the error — the durable copy lags until the
//! next successful write, so callers must not assume read-after-write
//! durability across restarts when a save has failed.

mod history;
mod reports;

pub use history::HistoryRepository;
pub use reports::ReportRepository;
