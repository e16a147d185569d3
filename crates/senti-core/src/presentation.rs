//! Mapping from analysis results to what the user sees.

use serde::Serialize;

use crate::model::{AnalysisResult, MISSING_SENTIMENT};

/// Warning shown when Analyze is triggered with nothing to analyze.
pub const EMPTY_INPUT_WARNING: &str = "Please enter text to analyze.";

/// Notice shown for any backend or transport failure.
pub const CONNECTIVITY_NOTICE: &str =
    "Could not connect to the FastAPI backend. Please make sure it's running.";

/// Notice shown above a successful prediction.
pub const SUCCESS_NOTICE: &str = "Prediction Complete!";

/// Heading above the colored label.
pub const RESULT_HEADING: &str = "Predicted Sentiment:";

/// Display color family of a sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Tone {
    /// Classify a label, ignoring case. Anything unrecognized is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            _ => Self::Unknown,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Positive => "#28a745",
            Self::Negative => "#dc3545",
            Self::Neutral => "#ffc107",
            Self::Unknown => "#6c757d",
        }
    }

    /// The same color as an RGB triple, for true-color terminals.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Positive => (0x28, 0xa7, 0x45),
            Self::Negative => (0xdc, 0x35, 0x45),
            Self::Neutral => (0xff, 0xc1, 0x07),
            Self::Unknown => (0x6c, 0x75, 0x7d),
        }
    }
}

/// A label together with its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentDisplay {
    pub label: String,
    pub tone: Tone,
}

impl SentimentDisplay {
    pub fn color(&self) -> &'static str {
        self.tone.hex()
    }
}

/// Map a result to its label and color. Total over every input.
pub fn present(result: &AnalysisResult) -> SentimentDisplay {
    match result {
        AnalysisResult::Success { sentiment } => SentimentDisplay {
            label: sentiment.clone(),
            tone: Tone::from_label(sentiment),
        },
        AnalysisResult::BackendError { .. } | AnalysisResult::ConnectivityError { .. } => {
            SentimentDisplay {
                label: MISSING_SENTIMENT.to_string(),
                tone: Tone::Unknown,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: [&str; 4] = ["#28a745", "#dc3545", "#ffc107", "#6c757d"];

    #[test]
    fn test_recognized_labels() {
        assert_eq!(Tone::from_label("positive").hex(), "#28a745");
        assert_eq!(Tone::from_label("negative").hex(), "#dc3545");
        assert_eq!(Tone::from_label("neutral").hex(), "#ffc107");
    }

    #[test]
    fn test_case_insensitive() {
        for label in ["POSITIVE", "Positive", "positive", "pOsItIvE"] {
            assert_eq!(Tone::from_label(label), Tone::Positive, "{}", label);
        }
        assert_eq!(Tone::from_label("NEGATIVE"), Tone::Negative);
        assert_eq!(Tone::from_label("Neutral"), Tone::Neutral);
    }

    #[test]
    fn test_mapping_is_total() {
        let labels = [
            "", " ", "mixed", "Error", "positive ", " positive", "positively",
            "😀", "NaN", "null", "neutral\n", "ÉMOTION",
        ];
        for label in labels {
            let display = present(&AnalysisResult::success(label));
            assert!(PALETTE.contains(&display.color()), "{:?}", label);
            assert_eq!(display.tone, Tone::Unknown, "{:?}", label);
            assert_eq!(display.label, label);
        }
    }

    #[test]
    fn test_failures_map_to_gray() {
        let results = [
            AnalysisResult::BackendError {
                detail: "sentiment was null".to_string(),
            },
            AnalysisResult::ConnectivityError {
                detail: "connection refused".to_string(),
            },
        ];
        for result in results {
            let display = present(&result);
            assert_eq!(display.color(), "#6c757d");
            assert_eq!(display.label, "Error");
        }
    }

    #[test]
    fn test_missing_field_default_is_gray() {
        let display = present(&AnalysisResult::success(MISSING_SENTIMENT));
        assert_eq!(display.label, "Error");
        assert_eq!(display.color(), "#6c757d");
    }

    #[test]
    fn test_rgb_matches_hex() {
        for tone in [Tone::Positive, Tone::Negative, Tone::Neutral, Tone::Unknown] {
            let (r, g, b) = tone.rgb();
            assert_eq!(format!("#{:02x}{:02x}{:02x}", r, g, b), tone.hex());
        }
    }
}
