//! The identification flow: classify a photo, reconcile invasive status
//! against the catalog, persist the result, and optionally file a report for
//! it later.

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::SpeciesCatalog;
use crate::config::AppConfig;
use crate::inference::{HttpClassifier, PlantClassifier};
use crate::repository::{HistoryRepository, ReportRepository};
use crate::storage::FileStore;
use crate::types::{IdentificationRecord, ReportRecord, Severity};

/// Outcome of one identification attempt. `Skipped` is the non-crash path for
/// responses that carry no usable species information at all.
#[derive(Debug)]
pub enum IdentificationOutcome {
    /// A record was created and inserted into the history.
    Identified(IdentificationRecord),
    /// The classifier answered but named nothing (or gave no confidence);
    /// no record was created.
    Skipped { message: String },
}

/// Wires the classifier, catalog, and repositories together. Construct one at
/// process start and hand out references — every dependency is explicit.
pub struct IdentificationPipeline {
    classifier: Arc<dyn PlantClassifier>,
    catalog: Arc<SpeciesCatalog>,
    history: Arc<HistoryRepository>,
    store: Arc<FileStore>,
}

impl IdentificationPipeline {
    pub fn new(
        classifier: Arc<dyn PlantClassifier>,
        catalog: Arc<SpeciesCatalog>,
        history: Arc<HistoryRepository>,
        store: Arc<FileStore>,
    ) -> Self {
        Self {
            classifier,
            catalog,
            history,
            store,
        }
    }

    /// Build the full object graph from configuration: file store, history
    /// repository, HTTP classifier, and the built-in catalog.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let store = Arc::new(
            FileStore::open(&config.data_dir)
                .with_context(|| format!("opening data dir {}", config.data_dir.display()))?,
        );
        let classifier = Arc::new(HttpClassifier::new(
            &config.inference.base_url,
            config.inference.timeout(),
        )?);
        let catalog = Arc::new(SpeciesCatalog::builtin()?);
        let history = Arc::new(HistoryRepository::open(store.clone()));
        Ok(Self::new(classifier, catalog, history, store))
    }

    pub fn history(&self) -> &Arc<HistoryRepository> {
        &self.history
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    /// Identify the plant in `jpeg`, reconcile invasive status, store the
    /// photo, and insert the record into the history.
    ///
    /// Transport/parse failures from the classifier propagate as errors and
    /// create no record, so cancelling the call never leaves the history
    /// half-written — persistence starts only after a result is in hand.
    pub async fn identify_and_record(
        &self,
        jpeg: &[u8],
        location: Option<(f64, f64)>,
    ) -> anyhow::Result<IdentificationOutcome> {
        let result = self.classifier.identify(jpeg).await?;

        // Required-field rule: a response naming no species (or carrying no
        // confidence) is a skipped event, not an error and not a record.
        let common_name = match &result.common_name {
            Some(name) => name.clone(),
            None => {
                info!(status = result.status, "classifier named no species, skipping");
                return Ok(IdentificationOutcome::Skipped {
                    message: result.message,
                });
            }
        };
        let confidence = match result.confidence {
            Some(c) => c,
            None => {
                info!(name = %common_name, "classifier gave no confidence, skipping");
                return Ok(IdentificationOutcome::Skipped {
                    message: result.message,
                });
            }
        };
        let scientific_name = result.scientific_name.clone().unwrap_or_else(|| common_name.clone());

        // An invasive-status block from the endpoint is authoritative; only
        // its absence sends us to the local catalog.
        let invasive = match result.invasive_status {
            Some(status) => status.is_invasive.then_some((status.severity, status.reason)),
            None => self
                .catalog
                .lookup(Some(&common_name), Some(&scientific_name))
                .map(|entry| {
                    warn!(
                        species = %entry.canonical_name,
                        severity = %entry.severity,
                        "invasive species matched in local catalog"
                    );
                    (entry.severity, entry.reason.clone())
                }),
        };

        let mut record = IdentificationRecord::new(common_name, scientific_name, confidence);
        if let Some((severity, reason)) = invasive {
            record.is_invasive = true;
            record.severity = Some(severity);
            record.reason = Some(reason);
        }
        if let Some((latitude, longitude)) = location {
            record.latitude = Some(latitude);
            record.longitude = Some(longitude);
        }

        // Keep the photo under a generated key; a failed blob write degrades
        // the record (no image) rather than dropping the identification.
        let image_key = format!("{}.jpg", Uuid::new_v4());
        match self.store.save_image(jpeg, &image_key) {
            Ok(key) => record.image_file_name = Some(key),
            Err(e) => warn!("failed to store identification photo: {}", e),
        }

        self.history.insert(record.clone())?;
        info!(
            id = %record.id,
            species = %record.scientific_name,
            invasive = record.is_invasive,
            "identification recorded"
        );
        Ok(IdentificationOutcome::Identified(record))
    }

    /// File a report for an identified record: create the immutable
    /// [`ReportRecord`], then mark the history record as reported and link
    /// the two. Requires the record to carry a location.
    pub fn file_report(
        &self,
        record_id: Uuid,
        reports: &ReportRepository,
    ) -> anyhow::Result<ReportRecord> {
        let mut record = self
            .history
            .get(record_id)
            .with_context(|| format!("no identification record with id {}", record_id))?;

        let (latitude, longitude) = match (record.latitude, record.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => bail!("record {} has no location; a report needs one", record_id),
        };

        let report = ReportRecord::new(
            record.common_name.clone(),
            record.scientific_name.clone(),
            latitude,
            longitude,
            record.severity.unwrap_or(Severity::Unknown),
        );
        reports.insert(report.clone())?;

        record.was_reported = true;
        record.report_id = Some(report.id);
        self.history.update(record)?;

        info!(report_id = %report.id, record_id = %record_id, "report filed");
        Ok(report)
    }
}
