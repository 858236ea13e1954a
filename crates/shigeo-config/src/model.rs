// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Shigeo assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Shigeo configuration.
///
/// All sections are optional and default to values that reach the public
/// OpenAI and Replicate endpoints with credentials taken from the
/// environment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShigeoConfig {
    /// Assistant identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// LLM service settings (classification, correction, fallback).
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// VQA service settings.
    #[serde(default)]
    pub replicate: ReplicateConfig,

    /// Conversation store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// HTTP boundary settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Assistant identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the assistant.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "shigeo".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// OpenAI chat-completions configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// API key. `None` falls back to the `OPENAI_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// Model used for every prompt the assistant sends.
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries on transient HTTP status codes. Zero disables retrying.
    #[serde(default)]
    pub max_retries: u32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_base_url(),
            model: default_openai_model(),
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
        }
    }
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// Replicate predictions configuration for the BLIP-2 VQA model.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReplicateConfig {
    /// API token. `None` falls back to the `REPLICATE_API_TOKEN` environment variable.
    #[serde(default)]
    pub api_token: Option<String>,

    #[serde(default = "default_replicate_base_url")]
    pub base_url: String,

    /// Model version hash passed as `version` in prediction requests.
    #[serde(default = "default_model_version")]
    pub model_version: String,

    /// Delay between polls of a pending prediction.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Maximum number of polls before giving up on a prediction.
    #[serde(default = "default_max_polls")]
    pub max_polls: u32,
}

impl Default for ReplicateConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: default_replicate_base_url(),
            model_version: default_model_version(),
            poll_interval_ms: default_poll_interval_ms(),
            max_polls: default_max_polls(),
        }
    }
}

fn default_replicate_base_url() -> String {
    "https://api.replicate.com/v1".to_string()
}

fn default_model_version() -> String {
    "4b32258c42e9efd4288bb9910bc532a69727f9acd26aa08e175713a0a857a608".to_string()
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_max_polls() -> u32 {
    240
}

/// SQLite conversation store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("shigeo").join("shigeo.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("shigeo.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory where uploaded photos are stored, one file per user.
    #[serde(default = "default_image_dir")]
    pub image_dir: String,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            image_dir: default_image_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_image_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("shigeo").join("images"))
        .unwrap_or_else(|| std::path::PathBuf::from("images"))
        .to_string_lossy()
        .into_owned()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}
