// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock LLM provider adapter for deterministic testing.
//!
//! `MockProvider` implements `ProviderAdapter` with pre-configured responses
//! and records every request it receives.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use shigeo_core::{
    AdapterType, HealthStatus, PluginAdapter, ProviderAdapter, ProviderRequest,
    ProviderResponse, ShigeoError, TokenUsage,
};

/// Default completion when the queue is empty.
pub const DEFAULT_RESPONSE: &str = "mock response";

/// A queued outcome: a completion text or a provider failure message.
type Scripted = Result<String, String>;

/// A mock LLM provider that returns pre-configured responses.
///
/// Responses are popped from a FIFO queue. When the queue is empty,
/// [`DEFAULT_RESPONSE`] is returned.
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
    next_id: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicUsize::new(1),
        }
    }

    /// Create a mock provider pre-loaded with the given responses.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().map(Ok).collect())),
            requests: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicUsize::new(1),
        }
    }

    /// Add a response to the end of the queue.
    pub async fn add_response(&self, text: impl Into<String>) {
        self.responses.lock().await.push_back(Ok(text.into()));
    }

    /// Queue a provider error at the end of the queue.
    pub async fn fail_next(&self, message: impl Into<String>) {
        self.responses.lock().await.push_back(Err(message.into()));
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    async fn next_response(&self) -> Scripted {
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_RESPONSE.to_string()))
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, ShigeoError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ShigeoError> {
        Ok(())
    }
}

#[async_trait]
impl ProviderAdapter for MockProvider {
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ShigeoError> {
        self.requests.lock().await.push(request);
        match self.next_response().await {
            Ok(text) => Ok(ProviderResponse {
                id: format!("mock-resp-{}", self.next_id.fetch_add(1, Ordering::SeqCst)),
                content: text,
                model: "mock-model".to_string(),
                usage: TokenUsage {
                    input_tokens: 10,
                    output_tokens: 20,
                },
            }),
            Err(message) => Err(ShigeoError::Provider {
                message,
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shigeo_core::ProviderMessage;

    fn request(text: &str) -> ProviderRequest {
        ProviderRequest {
            messages: vec![ProviderMessage::user(text)],
            temperature: None,
            max_tokens: Some(64),
        }
    }

    #[tokio::test]
    async fn default_response_when_queue_empty() {
        let provider = MockProvider::new();
        let resp = provider.complete(request("hi")).await.expect("complete");
        assert_eq!(resp.content, DEFAULT_RESPONSE);
    }

    #[tokio::test]
    async fn queued_responses_returned_in_order() {
        let provider = MockProvider::with_responses(vec!["first".into(), "second".into()]);
        provider.add_response("third").await;

        for expected in ["first", "second", "third", DEFAULT_RESPONSE] {
            let resp = provider.complete(request("q")).await.expect("complete");
            assert_eq!(resp.content, expected);
        }
    }

    #[tokio::test]
    async fn requests_are_recorded() {
        let provider = MockProvider::new();
        provider.complete(request("one")).await.expect("complete");
        provider.complete(request("two")).await.expect("complete");

        let requests = provider.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].messages[0].content, "two");
    }

    #[tokio::test]
    async fn scripted_failure_is_a_provider_error() {
        let provider = MockProvider::new();
        provider.fail_next("rate limited").await;
        let err = provider.complete(request("q")).await.expect_err("should fail");
        assert!(matches!(err, ShigeoError::Provider { ref message, .. } if message == "rate limited"));
        assert_eq!(provider.call_count().await, 1);
    }

    #[tokio::test]
    async fn response_ids_are_sequential() {
        let provider = MockProvider::new();
        let first = provider.complete(request("a")).await.expect("complete");
        let second = provider.complete(request("b")).await.expect("complete");
        assert_eq!(first.id, "mock-resp-1");
        assert_eq!(second.id, "mock-resp-2");
    }
}
