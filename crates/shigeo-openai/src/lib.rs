// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI chat-completions provider adapter for the Shigeo assistant.
//!
//! Implements [`ProviderAdapter`] over `POST {base_url}/chat/completions`.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use shigeo_config::{ShigeoConfig, resolve_secret};
use shigeo_core::{
    AdapterType, HealthStatus, PluginAdapter, ProviderAdapter, ProviderRequest,
    ProviderResponse, ShigeoError, TokenUsage,
};
use tracing::{debug, info};

use crate::client::OpenAiClient;
use crate::types::{ChatMessage, ChatRequest};

/// OpenAI provider implementing [`ProviderAdapter`].
///
/// API key resolution order: `openai.api_key` -> `OPENAI_API_KEY` -> error.
pub struct OpenAiProvider {
    client: OpenAiClient,
    model: String,
}

impl OpenAiProvider {
    pub fn new(config: &ShigeoConfig) -> Result<Self, ShigeoError> {
        let api_key = resolve_secret(&config.openai.api_key, "OPENAI_API_KEY", "openai.api_key")?;
        let client = OpenAiClient::new(
            &api_key,
            &config.openai.base_url,
            Duration::from_secs(config.openai.timeout_secs),
            config.openai.max_retries,
        )?;

        info!(model = %config.openai.model, "OpenAI provider initialized");
        Ok(Self::with_client(client, config.openai.model.clone()))
    }

    pub fn with_client(client: OpenAiClient, model: String) -> Self {
        Self { client, model }
    }

    fn to_chat_request(&self, request: &ProviderRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.to_string(),
                    content: Some(m.content.clone()),
                })
                .collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl PluginAdapter for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, ShigeoError> {
        // Probing the API would spend tokens.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ShigeoError> {
        debug!("OpenAI provider shutting down");
        Ok(())
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiProvider {
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ShigeoError> {
        let response = self.client.chat(&self.to_chat_request(&request)).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ShigeoError::Provider {
                message: "completion contained no message content".into(),
                source: None,
            })?;

        let usage = response
            .usage
            .map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();
        debug!(
            model = %response.model,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "completion received"
        );

        Ok(ProviderResponse {
            id: response.id,
            content,
            model: response.model,
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use shigeo_core::ProviderMessage;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn provider(base_url: &str) -> OpenAiProvider {
        let client = OpenAiClient::new(
            &SecretString::from("sk-test".to_string()),
            base_url,
            Duration::from_secs(5),
            0,
        )
        .expect("client");
        OpenAiProvider::with_client(client, "gpt-3.5-turbo".into())
    }

    fn request(temperature: Option<f32>) -> ProviderRequest {
        ProviderRequest {
            messages: vec![
                ProviderMessage::system("You are an AI assistant"),
                ProviderMessage::user("Is it raining?"),
            ],
            temperature,
            max_tokens: Some(20),
        }
    }

    async fn mount_reply(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn sent_body(requests: &[Request]) -> serde_json::Value {
        serde_json::from_slice(&requests[0].body).expect("request body should be JSON")
    }

    #[tokio::test]
    async fn complete_maps_roles_and_returns_first_choice() {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            serde_json::json!({
                "id": "c1",
                "model": "gpt-3.5-turbo-0125",
                "choices": [
                    {"message": {"role": "assistant", "content": "NO"}},
                    {"message": {"role": "assistant", "content": "YES"}}
                ],
                "usage": {"prompt_tokens": 40, "completion_tokens": 1}
            }),
        )
        .await;

        let response = provider(&server.uri())
            .complete(request(Some(0.3)))
            .await
            .expect("complete");
        assert_eq!(response.content, "NO");
        assert_eq!(response.usage.input_tokens, 40);

        let received = server.received_requests().await.expect("recording enabled");
        let body = sent_body(&received);
        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Is it raining?");
        assert!((body["temperature"].as_f64().unwrap_or_default() - 0.3).abs() < 1e-6);
    }

    #[tokio::test]
    async fn temperature_omitted_when_unset() {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            serde_json::json!({"id": "c2", "model": "m", "choices": [{"message": {"role": "assistant", "content": "ok"}}]}),
        )
        .await;

        provider(&server.uri())
            .complete(request(None))
            .await
            .expect("complete");
        let received = server.received_requests().await.expect("recording enabled");
        assert!(sent_body(&received).get("temperature").is_none());
    }

    #[tokio::test]
    async fn empty_choices_is_a_provider_error() {
        let server = MockServer::start().await;
        mount_reply(&server, serde_json::json!({"id": "c3", "model": "m", "choices": []})).await;

        let err = provider(&server.uri())
            .complete(request(None))
            .await
            .expect_err("should fail");
        assert!(matches!(err, ShigeoError::Provider { .. }));
    }

    #[test]
    fn missing_key_is_a_config_error() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("OPENAI_API_KEY", "");
            let mut config = ShigeoConfig::default();
            config.openai.api_key = None;

            let err = OpenAiProvider::new(&config)
                .err()
                .expect("should fail without a key");
            assert!(matches!(err, ShigeoError::Config(_)));
            let msg = err.to_string();
            assert!(msg.contains("openai.api_key"), "got: {msg}");
            assert!(msg.contains("OPENAI_API_KEY"), "got: {msg}");
            Ok(())
        });
    }
}
