//! Domain types shared across the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How aggressively an invasive species spreads and how much damage it does.
///
/// `Unknown` covers upstream payloads that carry an invasive flag without a
/// usable severity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Unknown,
}

impl Severity {
    /// Lenient parse used when projecting loosely-typed payloads. Anything
    /// unrecognized becomes `Unknown` rather than an error.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Low" | "low" => Severity::Low,
            "Medium" | "medium" => Severity::Medium,
            "High" | "high" => Severity::High,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invasive-status block attached to a classification.
///
/// Presence of this struct is meaningful on its own: a result that carries
/// `Some(InvasiveStatus { is_invasive: false, .. })` was explicitly cleared by
/// the upstream service, while `None` means the question is still open and the
/// local catalog must be consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvasiveStatus {
    pub is_invasive: bool,
    pub severity: Severity,
    pub reason: String,
}

/// Normalized outcome of one inference request.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub status: i64,
    pub message: String,
    pub inference_secs: Option<f64>,
    /// Display name; after normalization this is never `Some("")` — it falls
    /// back to the scientific name when the upstream omits it.
    pub common_name: Option<String>,
    pub scientific_name: Option<String>,
    /// Classifier confidence in [0, 1].
    pub confidence: Option<f64>,
    pub invasive_status: Option<InvasiveStatus>,
}

/// One user-facing identification event, persisted in the history file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentificationRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub common_name: String,
    pub scientific_name: String,
    pub confidence: f64,
    pub is_invasive: bool,
    pub severity: Option<Severity>,
    pub reason: Option<String>,
    /// Key of the stored JPEG under the image sub-namespace, if one was kept.
    pub image_file_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub was_reported: bool,
    pub report_id: Option<Uuid>,
}

impl IdentificationRecord {
    /// Create a fresh record with a generated id and the current timestamp.
    /// Report linkage and image/location fields start unset and are filled in
    /// by later in-place updates.
    pub fn new(
        common_name: impl Into<String>,
        scientific_name: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            common_name: common_name.into(),
            scientific_name: scientific_name.into(),
            confidence,
            is_invasive: false,
            severity: None,
            reason: None,
            image_file_name: None,
            latitude: None,
            longitude: None,
            was_reported: false,
            report_id: None,
        }
    }
}

/// One report filed with the (simulated) authority. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub common_name: String,
    pub scientific_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub severity: Severity,
}

impl ReportRecord {
    pub fn new(
        common_name: impl Into<String>,
        scientific_name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        severity: Severity,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            common_name: common_name.into(),
            scientific_name: scientific_name.into(),
            latitude,
            longitude,
            severity,
        }
    }
}

/// View filters over the identification history. Filtering never mutates the
/// underlying collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFilter {
    All,
    InvasiveOnly,
    ReportedOnly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parse_is_lenient() {
        assert_eq!(Severity::parse("High"), Severity::High);
        assert_eq!(Severity::parse(" medium "), Severity::Medium);
        assert_eq!(Severity::parse("catastrophic"), Severity::Unknown);
        assert_eq!(Severity::parse(""), Severity::Unknown);
    }

    #[test]
    fn severity_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"High\"");
        let back: Severity = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(back, Severity::Low);
    }

    #[test]
    fn record_dates_serialize_as_iso8601() {
        let record = IdentificationRecord::new("水葫芦", "Eichhornia crassipes", 0.97);
        let json = serde_json::to_value(&record).unwrap();
        let date = json["date"].as_str().unwrap();
        // RFC 3339: sortable as text, e.g. 2026-08-31T12:00:00Z
        assert!(date.contains('T'));
        let back: IdentificationRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
