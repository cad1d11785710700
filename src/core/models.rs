use serde::{
    Deserialize,
    Serialize,
};

use crate::core::CloudError;

/// Generic message shown when a failed response carries no usable `detail`.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Message used when an error produced no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// One extracted keyword and its relative importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordItem {
    pub word: String,
    pub weight: f32,
}

impl WordItem {
    pub fn new(word: impl Into<String>, weight: f32) -> Self {
        Self { word: word.into(), weight }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub words: Vec<WordItem>,
}

impl AnalyzeResponse {
    /// Rejects items the renderer cannot place: empty words and non-finite weights.
    pub fn validate(self) -> Result<Vec<WordItem>, CloudError> {
        for (index, item) in self.words.iter().enumerate() {
            if item.word.is_empty() {
                return Err(CloudError::InvalidResponse(format!("word at index {index} is empty")));
            }
            if !item.weight.is_finite() {
                return Err(CloudError::InvalidResponse(format!(
                    "weight of '{}' is not a finite number",
                    item.word
                )));
            }
        }
        Ok(self.words)
    }
}

/// Body of a non-2xx response. FastAPI sends `detail` as a string for
/// declared errors and as a list for validation errors, so it stays untyped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorPayload {
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeOutcome {
    Success { words: Vec<WordItem> },
    Failure { message: String },
}

impl AnalyzeOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            AnalyzeOutcome::Failure { message: UNKNOWN_ERROR.to_string() }
        } else {
            AnalyzeOutcome::Failure { message }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalyzeOutcome::Success { .. })
    }
}

impl From<CloudError> for AnalyzeOutcome {
    fn from(error: CloudError) -> Self {
        AnalyzeOutcome::failure(error.to_string())
    }
}
