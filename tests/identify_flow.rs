//! End-to-end flow: classify → reconcile against the catalog → persist →
//! file a report.

mod common;

use plantguard::{
    ClassificationResult, HistoryFilter, IdentificationOutcome, MockClassifier, Severity,
};

#[tokio::test]
async fn water_hyacinth_is_flagged_invasive_via_catalog() {
    let (_dir, pipeline, _reports) = common::temp_pipeline(common::mock_water_hyacinth());

    let outcome = pipeline
        .identify_and_record(&common::fake_jpeg(), None)
        .await
        .unwrap();

    let record = match outcome {
        IdentificationOutcome::Identified(record) => record,
        other => panic!("expected an identified record, got {:?}", other),
    };

    // The mock response has no invasive block; the catalog supplied it.
    assert!(record.is_invasive);
    assert_eq!(record.severity, Some(Severity::High));
    assert_eq!(record.scientific_name, "Eichhornia crassipes");
    assert_eq!(record.confidence, 0.97);
    assert!(record.reason.as_deref().unwrap_or("").contains("Water hyacinth"));
    assert!(record.image_file_name.is_some());

    let all = pipeline.history().list(HistoryFilter::All);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, record.id);
    assert_eq!(pipeline.history().list(HistoryFilter::InvasiveOnly).len(), 1);
}

#[tokio::test]
async fn explicit_invasive_block_from_endpoint_is_authoritative() {
    let classifier = MockClassifier::new(ClassificationResult {
        status: 0,
        message: "True".to_string(),
        inference_secs: Some(1.0),
        common_name: Some("水葫芦".to_string()),
        scientific_name: Some("Eichhornia crassipes".to_string()),
        confidence: Some(0.9),
        invasive_status: Some(plantguard::InvasiveStatus {
            is_invasive: false,
            severity: Severity::Unknown,
            reason: "Cleared by regional authority.".to_string(),
        }),
    });
    let (_dir, pipeline, _reports) = common::temp_pipeline(classifier);

    let outcome = pipeline
        .identify_and_record(&common::fake_jpeg(), None)
        .await
        .unwrap();
    let record = match outcome {
        IdentificationOutcome::Identified(record) => record,
        other => panic!("expected an identified record, got {:?}", other),
    };

    // Even though the catalog knows this species, the explicit not-invasive
    // block wins — the catalog is only consulted when the block is absent.
    assert!(!record.is_invasive);
    assert_eq!(record.severity, None);
}

#[tokio::test]
async fn unnamed_result_is_skipped_without_a_record() {
    let classifier = MockClassifier::new(ClassificationResult {
        status: 1,
        message: "no plant detected".to_string(),
        inference_secs: Some(0.4),
        common_name: None,
        scientific_name: None,
        confidence: None,
        invasive_status: None,
    });
    let (_dir, pipeline, _reports) = common::temp_pipeline(classifier);

    let outcome = pipeline
        .identify_and_record(&common::fake_jpeg(), None)
        .await
        .unwrap();
    match outcome {
        IdentificationOutcome::Skipped { message } => {
            assert_eq!(message, "no plant detected");
        }
        other => panic!("expected a skipped outcome, got {:?}", other),
    }
    assert!(pipeline.history().is_empty());
}

#[tokio::test]
async fn missing_confidence_is_also_skipped() {
    let classifier = MockClassifier::new(ClassificationResult {
        status: 0,
        message: "True".to_string(),
        inference_secs: None,
        common_name: Some("Eichhornia crassipes".to_string()),
        scientific_name: Some("Eichhornia crassipes".to_string()),
        confidence: None,
        invasive_status: None,
    });
    let (_dir, pipeline, _reports) = common::temp_pipeline(classifier);

    let outcome = pipeline
        .identify_and_record(&common::fake_jpeg(), None)
        .await
        .unwrap();
    assert!(matches!(outcome, IdentificationOutcome::Skipped { .. }));
    assert!(pipeline.history().is_empty());
}

#[tokio::test]
async fn filing_a_report_links_record_and_report() {
    let (_dir, pipeline, reports) = common::temp_pipeline(common::mock_water_hyacinth());

    let outcome = pipeline
        .identify_and_record(&common::fake_jpeg(), Some((39.9041, 116.4073)))
        .await
        .unwrap();
    let record = match outcome {
        IdentificationOutcome::Identified(record) => record,
        other => panic!("expected an identified record, got {:?}", other),
    };

    let report = pipeline.file_report(record.id, &reports).unwrap();
    assert_eq!(report.scientific_name, "Eichhornia crassipes");
    assert_eq!(report.severity, Severity::High);
    assert_eq!(report.latitude, 39.9041);

    let updated = pipeline.history().get(record.id).unwrap();
    assert!(updated.was_reported);
    assert_eq!(updated.report_id, Some(report.id));

    assert_eq!(pipeline.history().list(HistoryFilter::ReportedOnly).len(), 1);
    assert_eq!(reports.list().len(), 1);
    assert!(reports.unique_locations().contains("39.90,116.41"));
}

#[tokio::test]
async fn report_without_location_is_rejected() {
    let (_dir, pipeline, reports) = common::temp_pipeline(common::mock_water_hyacinth());

    let outcome = pipeline
        .identify_and_record(&common::fake_jpeg(), None)
        .await
        .unwrap();
    let record = match outcome {
        IdentificationOutcome::Identified(record) => record,
        other => panic!("expected an identified record, got {:?}", other),
    };

    let err = pipeline.file_report(record.id, &reports).unwrap_err();
    assert!(err.to_string().contains("no location"));
    assert!(reports.is_empty());
    // The record stays untouched.
    assert!(!pipeline.history().get(record.id).unwrap().was_reported);
}
