//! Classifier gateway types — Classification, Outcome, ClassifyError.
//!
//! The model is asked to answer in the exact form
//! `CATEGORY|COLOR|EXPLANATION|ICON`. A response that honors the format
//! becomes a [`Classification`]; one that doesn't is kept as raw text so the
//! caller can still show it. Transport-level failures never hide inside an
//! outcome — they are a separate [`ClassifyError`].

use serde::Serialize;

/// A well-formed four-field record parsed from the model response.
///
/// `color_name` is kept exactly as the model wrote it. The bin-color lookup
/// in [`crate::guide`] happens at render time and never rejects a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: String,
    pub color_name: String,
    pub explanation: String,
    pub icon: String,
}

/// Outcome of one classification attempt against a responsive model.
///
/// Serializes tagged (`kind` / `value`) for the `--json` output mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Outcome {
    /// The model followed the pipe-delimited format.
    Structured(Classification),
    /// The model responded with something else — displayed verbatim.
    Raw(String),
}

/// Failure taxonomy for the classifier gateway.
///
/// Every variant is terminal for the request: nothing is retried, nothing is
/// cached. The caller shows a single generic retry-prompting message and
/// logs the detail.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("request to the model endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text content")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_with_a_kind_tag() {
        let structured = Outcome::Structured(Classification {
            category: "Organic".into(),
            color_name: "Green".into(),
            explanation: "Food scraps".into(),
            icon: "🍏".into(),
        });
        let json = serde_json::to_value(&structured).unwrap();
        assert_eq!(json["kind"], "structured");
        assert_eq!(json["value"]["colorName"], "Green");
        assert_eq!(json["value"]["category"], "Organic");

        let raw = Outcome::Raw("Organic|Green".into());
        let json = serde_json::to_value(&raw).unwrap();
        assert_eq!(json["kind"], "raw");
        assert_eq!(json["value"], "Organic|Green");
    }
}
