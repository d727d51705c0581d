//! PlantGuard core: identify a plant from a photo via a remote inference
//! endpoint, reconcile the result against a curated invasive-species catalog,
//! and keep a durable local history of identifications and filed reports.
//!
//! The crate is the headless core of the app — no UI, camera, or map code
//! lives here. Consumers construct the pieces once at startup (see
//! [`pipeline::IdentificationPipeline`]) and pass handles around; there are
//! no process-wide singletons.

pub mod catalog;
pub mod config;
pub mod inference;
pub mod pipeline;
pub mod repository;
pub mod storage;
pub mod types;

pub use catalog::{CatalogError, SpeciesCatalog, SpeciesEntry};
pub use config::AppConfig;
pub use inference::{HttpClassifier, InferenceError, MockClassifier, PlantClassifier};
pub use pipeline::{IdentificationOutcome, IdentificationPipeline};
pub use repository::{HistoryRepository, ReportRepository};
pub use storage::{FileStore, StorageError};
pub use types::{
    ClassificationResult, HistoryFilter, IdentificationRecord, InvasiveStatus, ReportRecord,
    Severity,
};
