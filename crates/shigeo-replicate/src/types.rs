// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Replicate predictions API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /predictions`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest {
    pub version: String,
    pub input: BlipInput,
}

/// BLIP-2 model inputs.
#[derive(Debug, Clone, Serialize)]
pub struct BlipInput {
    /// Image as a `data:` URI.
    pub image: String,
    pub caption: bool,
    pub question: String,
    pub use_nucleus_sampling: bool,
    pub temperature: f32,
}

/// Lifecycle state of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl PredictionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PredictionStatus::Succeeded | PredictionStatus::Failed | PredictionStatus::Canceled
        )
    }
}

/// A prediction as returned by create and get.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub status: PredictionStatus,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub urls: Option<PredictionUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionUrls {
    pub get: String,
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub title: Option<String>,
    pub detail: String,
}

impl Prediction {
    /// Output as text. Array outputs (token streams) are concatenated.
    pub fn output_text(&self) -> Option<String> {
        match self.output.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(parts) => Some(
                parts
                    .iter()
                    .filter_map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(""),
            ),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Error text reported by the model run, if any.
    pub fn error_text(&self) -> String {
        match &self.error {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => "no error detail".to_string(),
            Some(other) => other.to_string(),
        }
    }
}
