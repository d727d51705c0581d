use std::sync::Arc;

use plantguard::{
    FileStore, HistoryRepository, IdentificationPipeline, MockClassifier, PlantClassifier,
    ReportRepository, SpeciesCatalog,
};

/// A pipeline wired against a temp directory and the given classifier.
/// Returns the temp dir guard so the files outlive the test body.
pub fn temp_pipeline(
    classifier: impl PlantClassifier + 'static,
) -> (tempfile::TempDir, IdentificationPipeline, ReportRepository) {
    init_tracing();
    let dir = tempfile::tempdir().expect("temp dir");
    let store = Arc::new(FileStore::open(dir.path()).expect("file store"));
    let catalog = Arc::new(SpeciesCatalog::builtin().expect("builtin catalog"));
    let history = Arc::new(HistoryRepository::open(store.clone()));
    let reports = ReportRepository::open(store.clone());
    let pipeline =
        IdentificationPipeline::new(Arc::new(classifier), catalog, history, store);
    (dir, pipeline, reports)
}

pub fn mock_water_hyacinth() -> MockClassifier {
    MockClassifier::water_hyacinth()
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

/// Four bytes of JPEG magic — enough for code that treats the payload as
/// opaque.
pub fn fake_jpeg() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0]
}
