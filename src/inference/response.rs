//! Normalization of the raw identification payload.
//!
//! The inference endpoint is known to omit fields inconsistently, so the
//! payload is parsed in two stages: first into a generic `serde_json::Value`,
//! then projected into a [`ClassificationResult`] with an explicit default
//! rule per field. A single missing or mistyped field never fails the whole
//! response — only a body that is not a JSON object at all is a hard error.

use serde_json::Value;
use tracing::debug;

use crate::types::{ClassificationResult, InvasiveStatus, Severity};

use super::error::InferenceError;

/// Project a raw payload into a well-formed [`ClassificationResult`].
///
/// Default rules, in order:
/// - `status` missing/mistyped → `-1`, `message` → `"Unknown"`.
/// - optional numerics and names stay `None` when absent.
/// - empty or missing `common_name` with a non-empty `scientific_name` →
///   the scientific name doubles as the display name.
/// - an `invasive_info` sub-object is parsed with its own defaults; its
///   *absence* is preserved as `None` so the caller can still consult the
///   local catalog.
pub fn normalize(raw: &Value) -> Result<ClassificationResult, InferenceError> {
    if !raw.is_object() {
        return Err(InferenceError::malformed(format!(
            "expected a JSON object, got {}",
            json_kind(raw)
        )));
    }

    let status = raw["status"].as_i64().unwrap_or(-1);
    let message = raw["message"].as_str().unwrap_or("Unknown").to_string();
    let inference_secs = raw["inference_time"].as_f64();
    let confidence = raw["confidence"].as_f64();

    let scientific_name = non_empty_string(&raw["scientific_name"]);
    let mut common_name = non_empty_string(&raw["common_name"]);

    // Display fallback: the endpoint frequently returns only the scientific
    // name, which then doubles as the display name.
    if common_name.is_none() {
        if let Some(scientific) = &scientific_name {
            debug!(name = %scientific, "no common name in payload, using scientific name");
            common_name = Some(scientific.clone());
        }
    }

    let invasive_status = raw
        .get("invasive_info")
        .and_then(Value::as_object)
        .map(|info| InvasiveStatus {
            is_invasive: info.get("is_invasive").and_then(Value::as_bool).unwrap_or(false),
            severity: info
                .get("severity")
                .and_then(Value::as_str)
                .map(Severity::parse)
                .unwrap_or(Severity::Unknown),
            reason: info
                .get("reason")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        });

    Ok(ClassificationResult {
        status,
        message,
        inference_secs,
        common_name,
        scientific_name,
        confidence,
        invasive_status,
    })
}

/// Extract a trimmed, non-empty string field. Whitespace-only and mistyped
/// values count as absent.
fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_is_projected() {
        let raw = json!({
            "status": 0,
            "message": "True",
            "inference_time": 2.47,
            "common_name": "Water Hyacinth",
            "scientific_name": "Eichhornia crassipes",
            "confidence": 0.966,
            "invasive_info": {
                "is_invasive": true,
                "severity": "High",
                "reason": "Clogs waterways."
            }
        });

        let result = normalize(&raw).unwrap();
        assert_eq!(result.status, 0);
        assert_eq!(result.message, "True");
        assert_eq!(result.inference_secs, Some(2.47));
        assert_eq!(result.common_name.as_deref(), Some("Water Hyacinth"));
        assert_eq!(result.scientific_name.as_deref(), Some("Eichhornia crassipes"));
        assert_eq!(result.confidence, Some(0.966));
        let invasive = result.invasive_status.unwrap();
        assert!(invasive.is_invasive);
        assert_eq!(invasive.severity, Severity::High);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let result = normalize(&json!({})).unwrap();
        assert_eq!(result.status, -1);
        assert_eq!(result.message, "Unknown");
        assert_eq!(result.inference_secs, None);
        assert_eq!(result.common_name, None);
        assert_eq!(result.scientific_name, None);
        assert_eq!(result.confidence, None);
        assert_eq!(result.invasive_status, None);
    }

    #[test]
    fn mistyped_fields_are_absorbed() {
        let raw = json!({
            "status": "zero",
            "message": 17,
            "confidence": "high",
            "scientific_name": 42
        });
        let result = normalize(&raw).unwrap();
        assert_eq!(result.status, -1);
        assert_eq!(result.message, "Unknown");
        assert_eq!(result.confidence, None);
        assert_eq!(result.scientific_name, None);
    }

    #[test]
    fn scientific_name_doubles_as_display_name() {
        let raw = json!({ "status": 0, "scientific_name": "Solidago canadensis" });
        let result = normalize(&raw).unwrap();
        assert_eq!(result.common_name.as_deref(), Some("Solidago canadensis"));

        // Same for an explicitly empty common name.
        let raw = json!({
            "status": 0,
            "common_name": "",
            "scientific_name": "Solidago canadensis"
        });
        let result = normalize(&raw).unwrap();
        assert_eq!(result.common_name.as_deref(), Some("Solidago canadensis"));
    }

    #[test]
    fn absent_invasive_info_stays_distinct_from_explicit_not_invasive() {
        let without = normalize(&json!({ "status": 0 })).unwrap();
        assert_eq!(without.invasive_status, None);

        let with = normalize(&json!({
            "status": 0,
            "invasive_info": { "is_invasive": false }
        }))
        .unwrap();
        let status = with.invasive_status.unwrap();
        assert!(!status.is_invasive);
        assert_eq!(status.severity, Severity::Unknown);
        assert_eq!(status.reason, "");
    }

    #[test]
    fn non_object_payload_is_a_hard_error() {
        let err = normalize(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.kind, super::super::error::InferenceErrorKind::Malformed);
        assert!(normalize(&json!("ok")).is_err());
        assert!(normalize(&Value::Null).is_err());
    }
}
