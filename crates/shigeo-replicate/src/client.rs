// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Replicate predictions API.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use shigeo_core::ShigeoError;
use tracing::debug;

use crate::types::{ApiErrorResponse, Prediction, PredictionRequest};

/// Server-side wait requested on prediction creation, in seconds.
const PREFER_WAIT: &str = "wait=60";

/// Client timeout; must exceed the server-side wait.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// Polling budget for a prediction that is not finished on creation.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_polls: u32,
}

/// HTTP client for creating and polling predictions.
#[derive(Debug, Clone)]
pub struct ReplicateClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReplicateClient {
    pub fn new(api_token: &SecretString, base_url: &str) -> Result<Self, ShigeoError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_token.expose_secret()))
            .map_err(|e| ShigeoError::Config(format!("invalid API token header value: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ShigeoError::Vision {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a prediction and polls it until it reaches a terminal state.
    pub async fn run(
        &self,
        request: &PredictionRequest,
        policy: PollPolicy,
    ) -> Result<Prediction, ShigeoError> {
        let mut prediction = self.create(request).await?;
        let mut polls = 0;

        while !prediction.status.is_terminal() {
            if polls >= policy.max_polls {
                return Err(ShigeoError::Vision {
                    message: format!(
                        "prediction {} still {:?} after {polls} polls",
                        prediction.id, prediction.status
                    ),
                    source: None,
                });
            }
            let url = prediction
                .urls
                .as_ref()
                .map(|u| u.get.clone())
                .unwrap_or_else(|| format!("{}/predictions/{}", self.base_url, prediction.id));

            tokio::time::sleep(policy.interval).await;
            polls += 1;
            prediction = self.get(&url).await?;
            debug!(id = %prediction.id, status = ?prediction.status, polls, "prediction polled");
        }

        Ok(prediction)
    }

    /// `POST /predictions`, asking the server to hold the response until done.
    pub async fn create(&self, request: &PredictionRequest) -> Result<Prediction, ShigeoError> {
        let response = self
            .client
            .post(format!("{}/predictions", self.base_url))
            .header("Prefer", PREFER_WAIT)
            .json(request)
            .send()
            .await
            .map_err(request_failed)?;
        parse_prediction(response).await
    }

    pub async fn get(&self, url: &str) -> Result<Prediction, ShigeoError> {
        let response = self.client.get(url).send().await.map_err(request_failed)?;
        parse_prediction(response).await
    }
}

fn request_failed(e: reqwest::Error) -> ShigeoError {
    ShigeoError::Vision {
        message: format!("HTTP request failed: {e}"),
        source: Some(Box::new(e)),
    }
}

async fn parse_prediction(response: reqwest::Response) -> Result<Prediction, ShigeoError> {
    let status = response.status();
    let body = response.text().await.map_err(|e| ShigeoError::Vision {
        message: format!("failed to read response body: {e}"),
        source: Some(Box::new(e)),
    })?;

    if !status.is_success() {
        let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(api_err) => format!(
                "Replicate API error ({}): {}",
                api_err.title.unwrap_or_else(|| status.to_string()),
                api_err.detail
            ),
            Err(_) => format!("API returned {status}: {body}"),
        };
        return Err(ShigeoError::Vision {
            message,
            source: None,
        });
    }

    serde_json::from_str(&body).map_err(|e| ShigeoError::Vision {
        message: format!("failed to parse prediction: {e}"),
        source: Some(Box::new(e)),
    })
}
