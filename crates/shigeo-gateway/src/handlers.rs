// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway.
//!
//! Handles POST /answer_question/ and GET /health.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use shigeo_core::{HealthStatus, ShigeoError, UserId};
use tracing::{error, info, warn};

use crate::server::GatewayState;

/// Response body for POST /answer_question/.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when every adapter is healthy, `"degraded"` otherwise.
    pub status: String,
    /// Adapter name -> status description.
    pub adapters: BTreeMap<String, String>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_body(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Maps a pipeline error to its HTTP status.
pub fn status_for(err: &ShigeoError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else if err.is_upstream() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn pipeline_error(err: ShigeoError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        error!(error = %err, "request failed");
    } else {
        warn!(error = %err, "request rejected");
    }
    error_body(status, err.to_string())
}

fn multipart_error(err: MultipartError) -> Response {
    warn!(error = %err, "malformed multipart body");
    error_body(err.status(), err.body_text())
}

/// The three form fields of an answer request.
#[derive(Debug, Default)]
struct AnswerForm {
    question: Option<String>,
    user_id: Option<String>,
    image: Option<Vec<u8>>,
}

impl AnswerForm {
    async fn read(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = AnswerForm::default();
        while let Some(field) = multipart.next_field().await? {
            match field.name() {
                Some("question") => form.question = Some(field.text().await?),
                Some("user_id") => form.user_id = Some(field.text().await?),
                Some("image") => form.image = Some(field.bytes().await?.to_vec()),
                _ => {}
            }
        }
        Ok(form)
    }

    /// Returns `(question, user_id, image)` or the first missing field.
    fn into_parts(self) -> Result<(String, String, Vec<u8>), ShigeoError> {
        let question = non_empty(self.question, "question")?;
        let user_id = non_empty(self.user_id, "user_id")?;
        let image = self
            .image
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| ShigeoError::InvalidInput("missing form field: image".into()))?;
        Ok((question, user_id, image))
    }
}

fn non_empty(value: Option<String>, field: &str) -> Result<String, ShigeoError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ShigeoError::InvalidInput(format!("missing form field: {field}")))
}

/// POST /answer_question/
///
/// Stores the uploaded image as the user's current image, then answers the
/// question against it.
pub async fn post_answer_question(
    State(state): State<GatewayState>,
    multipart: Multipart,
) -> Response {
    let form = match AnswerForm::read(multipart).await {
        Ok(form) => form,
        Err(e) => return multipart_error(e),
    };
    let (question, user_id, image) = match form.into_parts() {
        Ok(parts) => parts,
        Err(e) => return pipeline_error(e),
    };

    let user = UserId(user_id);
    let reference = match state.images.save(&user, image).await {
        Ok(reference) => reference,
        Err(e) => return pipeline_error(e),
    };

    match state
        .orchestrator
        .answer_question(&question, &user, &reference)
        .await
    {
        Ok(answer) => {
            info!(user_id = %user, "answer returned");
            Json(AnswerResponse { answer }).into_response()
        }
        Err(e) => pipeline_error(e),
    }
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    let mut adapters = BTreeMap::new();
    let mut all_healthy = true;

    for adapter in state.adapters.iter() {
        let description = match adapter.health_check().await {
            Ok(HealthStatus::Healthy) => "healthy".to_string(),
            Ok(HealthStatus::Degraded(msg)) => {
                all_healthy = false;
                format!("degraded: {msg}")
            }
            Ok(HealthStatus::Unhealthy(msg)) => {
                all_healthy = false;
                format!("unhealthy: {msg}")
            }
            Err(e) => {
                all_healthy = false;
                format!("unhealthy: {e}")
            }
        };
        adapters.insert(adapter.name().to_string(), description);
    }

    Json(HealthResponse {
        status: if all_healthy { "ok" } else { "degraded" }.to_string(),
        adapters,
    })
}
