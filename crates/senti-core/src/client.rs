//! HTTP client for the sentiment backend.
//!
//! Posts the text as a form field to `{backend}/analyze/` and reads
//! `{"sentiment": "..."}` back. One request per call, no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{SentiError, SentiResult};
use crate::model::{AnalysisRequest, AnalysisResult, MISSING_SENTIMENT};

/// Anything that can classify a request.
#[async_trait]
pub trait SentimentBackend: Send + Sync {
    /// Classify one request. Failures are reported in the result, never raised.
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult;
}

#[async_trait]
impl<T: SentimentBackend + ?Sized> SentimentBackend for Arc<T> {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        (**self).analyze(request).await
    }
}

/// reqwest-backed client for the analyze endpoint.
#[derive(Clone)]
pub struct InferenceClient {
    url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct AnalyzeForm<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(default = "missing_sentiment")]
    sentiment: String,
}

fn missing_sentiment() -> String {
    MISSING_SENTIMENT.to_string()
}

impl InferenceClient {
    /// Create a client posting to `url` (the full analyze endpoint).
    pub fn new(url: &str, timeout: Duration) -> SentiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SentiError::Http(e.to_string()))?;

        debug!(url = %url, timeout_ms = timeout.as_millis() as u64, "InferenceClient initialized");

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    /// Create a client from resolved settings.
    pub fn from_settings(settings: &Settings) -> SentiResult<Self> {
        Self::new(&settings.analyze_url(), settings.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SentimentBackend for InferenceClient {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        debug!(url = %self.url, chars = request.text().chars().count(), "Sending analyze request");

        let response = match self
            .client
            .post(&self.url)
            .form(&AnalyzeForm { text: request.text() })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %self.url, error = %e, "Sentiment backend unreachable");
                return AnalysisResult::ConnectivityError {
                    detail: e.to_string(),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            // The body is still decoded; the status alone does not decide the outcome.
            warn!(url = %self.url, status_code = %status, "Sentiment backend returned non-success status");
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %self.url, error = %e, "Failed to read sentiment backend response");
                return AnalysisResult::ConnectivityError {
                    detail: e.to_string(),
                };
            }
        };

        let result = decode_response(&body);
        debug!(?result, "Analyze request finished");
        result
    }
}

/// Decode an analyze response body.
///
/// Non-JSON bodies count as connectivity failures. JSON that is not an
/// object, or whose `sentiment` is not a string, is a backend error. A
/// missing `sentiment` becomes the label `"Error"`.
pub fn decode_response(body: &[u8]) -> AnalysisResult {
    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            return AnalysisResult::ConnectivityError {
                detail: format!("malformed response body: {}", e),
            }
        }
    };

    if !value.is_object() {
        return AnalysisResult::BackendError {
            detail: format!("expected a JSON object, got {}", value),
        };
    }

    match serde_json::from_value::<AnalyzeResponse>(value) {
        Ok(parsed) => AnalysisResult::Success {
            sentiment: parsed.sentiment,
        },
        Err(e) => AnalysisResult::BackendError {
            detail: e.to_string(),
        },
    }
}
