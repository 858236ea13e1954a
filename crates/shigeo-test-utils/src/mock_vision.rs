// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock VQA adapter with scripted answers.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use shigeo_core::{
    AdapterType, HealthStatus, PluginAdapter, ShigeoError, VisionAdapter, VisionRequest,
};

pub const DEFAULT_ANSWER: &str = "mock vision answer";

/// A mock VQA model. Answers are popped FIFO; requests are recorded.
#[derive(Default)]
pub struct MockVision {
    answers: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<VisionRequest>>,
}

impl MockVision {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(answers: Vec<String>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub async fn add_answer(&self, text: impl Into<String>) {
        self.answers.lock().await.push_back(Ok(text.into()));
    }

    /// Queue a vision error at the end of the queue.
    pub async fn fail_next(&self, message: impl Into<String>) {
        self.answers.lock().await.push_back(Err(message.into()));
    }

    pub async fn requests(&self) -> Vec<VisionRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl PluginAdapter for MockVision {
    fn name(&self) -> &str {
        "mock-vision"
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
        Ok(())
    }
}

#[async_trait]
impl VisionAdapter for MockVision {
    async fn answer(&self, request: VisionRequest) -> Result<String, ShigeoError> {
        self.requests.lock().await.push(request);
        let next = self.answers.lock().await.pop_front();
        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(ShigeoError::Vision {
                message,
                source: None,
            }),
            None => Ok(DEFAULT_ANSWER.to_string()),
        }
    }
}
