// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Replicate BLIP-2 vision adapter for the Shigeo assistant.
//!
//! Reads the referenced image from disk, sends it inline as a `data:` URI,
//! and waits for the prediction to finish.

pub mod client;
pub mod types;

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use shigeo_config::{ShigeoConfig, resolve_secret};
use shigeo_core::{
    AdapterType, HealthStatus, ImageReference, PluginAdapter, ShigeoError, VisionAdapter,
    VisionRequest,
};
use tracing::{debug, info};

use crate::client::{PollPolicy, ReplicateClient};
use crate::types::{BlipInput, PredictionRequest, PredictionStatus};

/// BLIP-2 on Replicate, implementing [`VisionAdapter`].
///
/// API token resolution order: `replicate.api_token` -> `REPLICATE_API_TOKEN` -> error.
pub struct ReplicateVision {
    client: ReplicateClient,
    model_version: String,
    policy: PollPolicy,
}

impl ReplicateVision {
    pub fn new(config: &ShigeoConfig) -> Result<Self, ShigeoError> {
        let token = resolve_secret(
            &config.replicate.api_token,
            "REPLICATE_API_TOKEN",
            "replicate.api_token",
        )?;
        let client = ReplicateClient::new(&token, &config.replicate.base_url)?;
        let policy = PollPolicy {
            interval: Duration::from_millis(config.replicate.poll_interval_ms),
            max_polls: config.replicate.max_polls,
        };

        info!(version = %config.replicate.model_version, "Replicate vision adapter initialized");
        Ok(Self::with_client(
            client,
            config.replicate.model_version.clone(),
            policy,
        ))
    }

    pub fn with_client(client: ReplicateClient, model_version: String, policy: PollPolicy) -> Self {
        Self {
            client,
            model_version,
            policy,
        }
    }
}

/// Reads an image file and encodes it as a `data:` URI.
pub async fn image_data_uri(image: &ImageReference) -> Result<String, ShigeoError> {
    let bytes = tokio::fs::read(image.as_str())
        .await
        .map_err(|e| ShigeoError::Image {
            message: format!("cannot read image {image}: {e}"),
            source: Some(Box::new(e)),
        })?;
    Ok(format!(
        "data:{};base64,{}",
        mime_for(Path::new(image.as_str())),
        STANDARD.encode(bytes)
    ))
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "image/jpeg",
    }
}

#[async_trait]
impl PluginAdapter for ReplicateVision {
    fn name(&self) -> &str {
        "replicate"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Vision
    }

    async fn health_check(&self) -> Result<HealthStatus, ShigeoError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ShigeoError> {
        debug!("Replicate vision adapter shutting down");
        Ok(())
    }
}

#[async_trait]
impl VisionAdapter for ReplicateVision {
    async fn answer(&self, request: VisionRequest) -> Result<String, ShigeoError> {
        let image = image_data_uri(&request.image).await?;
        let prediction_request = PredictionRequest {
            version: self.model_version.clone(),
            input: BlipInput {
                image,
                caption: request.caption,
                question: request.question,
                use_nucleus_sampling: request.use_nucleus_sampling,
                temperature: request.temperature,
            },
        };

        let prediction = self.client.run(&prediction_request, self.policy).await?;
        match prediction.status {
            PredictionStatus::Succeeded => {
                let answer = prediction.output_text().unwrap_or_default();
                debug!(id = %prediction.id, "prediction succeeded");
                Ok(answer)
            }
            status => Err(ShigeoError::Vision {
                message: format!(
                    "prediction {} ended {status:?}: {}",
                    prediction.id,
                    prediction.error_text()
                ),
                source: None,
            }),
        }
    }
}
