// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde cannot express, such as non-empty paths,
//! non-zero ports, and a recognised log level.

use crate::diagnostic::ConfigError;
use crate::model::ShigeoConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &ShigeoConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let level = config.agent.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        fail(format!(
            "agent.log_level `{}` is not one of {}",
            config.agent.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    let required = [
        ("openai.model", &config.openai.model),
        ("openai.base_url", &config.openai.base_url),
        ("replicate.model_version", &config.replicate.model_version),
        ("replicate.base_url", &config.replicate.base_url),
        ("storage.database_path", &config.storage.database_path),
        ("gateway.image_dir", &config.gateway.image_dir),
        ("gateway.host", &config.gateway.host),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            fail(format!("{key} must not be empty"));
        }
    }

    if config.gateway.port == 0 {
        fail("gateway.port must not be 0".to_string());
    }

    if config.gateway.max_upload_bytes == 0 {
        fail("gateway.max_upload_bytes must be at least 1".to_string());
    }

    if config.replicate.poll_interval_ms == 0 {
        fail("replicate.poll_interval_ms must be at least 1".to_string());
    }

    if config.replicate.max_polls == 0 {
        fail("replicate.max_polls must be at least 1".to_string());
    }

    if config.openai.timeout_secs == 0 {
        fail("openai.timeout_secs must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
