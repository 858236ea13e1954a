// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the OpenAI chat-completions endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Omitted from the body when `None` so the service default applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// One role-tagged message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Response body for a non-streaming completion.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_unset_sampling_fields() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: Some("hi".into()),
            }],
            temperature: None,
            max_tokens: Some(64),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json.get("temperature").is_none());
        assert_eq!(json["max_tokens"], 64);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn response_tolerates_missing_usage() {
        let body = r#"{"id":"c1","model":"m","choices":[{"message":{"role":"assistant","content":"ok"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).expect("deserialize");
        assert!(response.usage.is_none());
        assert_eq!(response.choices[0].message.content.as_deref(), Some("ok"));
    }

    #[test]
    fn error_body_parses_type_and_message() {
        let body = r#"{"error":{"message":"Rate limit reached","type":"requests","code":null}}"#;
        let err: ApiErrorResponse = serde_json::from_str(body).expect("deserialize");
        assert_eq!(err.error.type_.as_deref(), Some("requests"));
        assert_eq!(err.error.message, "Rate limit reached");
    }
}
