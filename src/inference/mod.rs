//! Remote plant classification: the HTTP client, the mock used by tests, and
//! the normalizer that turns the loosely-typed response into a
//! [`ClassificationResult`].

mod error;
mod response;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::types::ClassificationResult;

pub use error::{InferenceError, InferenceErrorKind};
pub use response::normalize;

/// Plant classifier — sends a JPEG to an inference service, gets back a
/// normalized classification. One request, one response; retry policy is the
/// caller's business.
#[async_trait]
pub trait PlantClassifier: Send + Sync {
    async fn identify(&self, jpeg: &[u8]) -> anyhow::Result<ClassificationResult>;
}

/// Classifier backed by the quick-identification HTTP endpoint.
pub struct HttpClassifier {
    client: Client,
    base_url: String,
}

impl HttpClassifier {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PlantClassifier for HttpClassifier {
    async fn identify(&self, jpeg: &[u8]) -> anyhow::Result<ClassificationResult> {
        let url = format!("{}/identify/quick", self.base_url);
        info!(url = %url, bytes = jpeg.len(), "Calling identification endpoint");

        let part = Part::bytes(jpeg.to_vec())
            .file_name("plant.jpg")
            .mime_str("image/jpeg")?;
        let form = Form::new().part("file", part);

        let resp = match self.client.post(&url).multipart(form).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("HTTP request failed: {}", e);
                return Err(InferenceError::network(&e).into());
            }
        };

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            error!(status = %status, "Identification endpoint error: {}", text);
            return Err(InferenceError::from_status(status.as_u16(), &text).into());
        }

        debug!("Identification response: {}", text);

        let raw: Value = serde_json::from_str(&text)
            .map_err(|e| InferenceError::malformed(format!("invalid JSON body: {}", e)))?;
        let result = normalize(&raw)?;
        info!(
            scientific_name = result.scientific_name.as_deref().unwrap_or("<none>"),
            confidence = result.confidence.unwrap_or(0.0),
            "Classification received"
        );
        Ok(result)
    }
}

/// Canned classifier for tests and previews, mirroring the staged response the
/// UI prototypes run against.
pub struct MockClassifier {
    result: ClassificationResult,
}

impl MockClassifier {
    pub fn new(result: ClassificationResult) -> Self {
        Self { result }
    }

    /// A plausible water-hyacinth identification with no invasive block, so
    /// the catalog stage gets exercised.
    pub fn water_hyacinth() -> Self {
        Self::new(ClassificationResult {
            status: 0,
            message: "True".to_string(),
            inference_secs: Some(2.47),
            common_name: Some("Eichhornia crassipes".to_string()),
            scientific_name: Some("Eichhornia crassipes".to_string()),
            confidence: Some(0.97),
            invasive_status: None,
        })
    }
}

#[async_trait]
impl PlantClassifier for MockClassifier {
    async fn identify(&self, _jpeg: &[u8]) -> anyhow::Result<ClassificationResult> {
        Ok(self.result.clone())
    }
}
