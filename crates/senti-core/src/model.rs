//! Request and result types for one trigger cycle.

use crate::error::{SentiError, SentiResult};

/// Label substituted when the backend answers without a `sentiment` field.
pub const MISSING_SENTIMENT: &str = "Error";

/// Text submitted for analysis.
///
/// Only constructible from text that is non-empty after trimming. The text
/// itself is kept as entered and sent to the backend unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    text: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> SentiResult<Self> {
        let text = text.into();
        if is_blank(&text) {
            return Err(SentiError::validation("text is empty"));
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// True when `text` has nothing but whitespace.
///
/// The file, group, record and unit separators (U+001C..=U+001F) count as
/// whitespace too, so input made of them is rejected like spaces are.
pub fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Outcome of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The backend answered. `sentiment` may be any string.
    Success { sentiment: String },
    /// The backend answered with JSON of the wrong shape.
    BackendError { detail: String },
    /// The request could not be sent or the answer could not be read.
    ConnectivityError { detail: String },
}

impl AnalysisResult {
    pub fn success(sentiment: impl Into<String>) -> Self {
        Self::Success {
            sentiment: sentiment.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
