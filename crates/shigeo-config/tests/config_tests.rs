// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Shigeo configuration system.

use shigeo_config::diagnostic::ConfigError;
use shigeo_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with every known section deserializes successfully.
#[test]
fn valid_toml_deserializes_into_shigeo_config() {
    let toml = r#"
[agent]
name = "shigeo-dev"
log_level = "debug"

[openai]
api_key = "sk-test"
base_url = "http://localhost:9999/v1"
model = "gpt-4o-mini"
timeout_secs = 30
max_retries = 2

[replicate]
api_token = "r8_test"
model_version = "abc123"
poll_interval_ms = 50
max_polls = 10

[storage]
database_path = "/tmp/shigeo-test.db"
wal_mode = false

[gateway]
host = "0.0.0.0"
port = 8080
image_dir = "/tmp/shigeo-images"
max_upload_bytes = 2048
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "shigeo-dev");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.openai.base_url, "http://localhost:9999/v1");
    assert_eq!(config.openai.model, "gpt-4o-mini");
    assert_eq!(config.openai.timeout_secs, 30);
    assert_eq!(config.openai.max_retries, 2);
    assert_eq!(config.replicate.api_token.as_deref(), Some("r8_test"));
    assert_eq!(config.replicate.model_version, "abc123");
    assert_eq!(config.replicate.poll_interval_ms, 50);
    assert_eq!(config.replicate.max_polls, 10);
    assert_eq!(config.storage.database_path, "/tmp/shigeo-test.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.gateway.port, 8080);
    assert_eq!(config.gateway.image_dir, "/tmp/shigeo-images");
    assert_eq!(config.gateway.max_upload_bytes, 2048);
}

/// An empty file yields the compiled defaults.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should deserialize");
    assert_eq!(config.agent.name, "shigeo");
    assert_eq!(config.agent.log_level, "info");
    assert!(config.openai.api_key.is_none());
    assert_eq!(config.openai.base_url, "https://api.openai.com/v1");
    assert_eq!(config.openai.model, "gpt-3.5-turbo");
    assert_eq!(config.openai.timeout_secs, 120);
    assert_eq!(config.openai.max_retries, 0);
    assert_eq!(config.replicate.base_url, "https://api.replicate.com/v1");
    assert_eq!(
        config.replicate.model_version,
        "4b32258c42e9efd4288bb9910bc532a69727f9acd26aa08e175713a0a857a608"
    );
    assert_eq!(config.replicate.poll_interval_ms, 500);
    assert_eq!(config.replicate.max_polls, 240);
    assert!(config.storage.database_path.ends_with("shigeo.db"));
    assert!(config.storage.wal_mode);
    assert_eq!(config.gateway.host, "127.0.0.1");
    assert_eq!(config.gateway.port, 8000);
    assert_eq!(config.gateway.max_upload_bytes, 10 * 1024 * 1024);
}

/// A partially specified section keeps defaults for the omitted keys.
#[test]
fn partial_section_keeps_remaining_defaults() {
    let config = load_config_from_str("[gateway]\nport = 9000\n").expect("should deserialize");
    assert_eq!(config.gateway.port, 9000);
    assert_eq!(config.gateway.host, "127.0.0.1");
}

/// Unknown field in [openai] is rejected.
#[test]
fn unknown_field_in_openai_produces_error() {
    let err = load_config_from_str("[openai]\nmodle = \"gpt-4\"\n")
        .expect_err("should reject unknown field");
    let err_str = err.to_string();
    assert!(
        err_str.contains("unknown field") || err_str.contains("modle"),
        "error should mention the bad key, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn unknown_top_level_section_is_rejected() {
    assert!(load_config_from_str("[telegram]\nbot_token = \"x\"\n").is_err());
}

/// Diagnostics name the unknown key, suggest the closest valid one, and list the section's keys.
#[test]
fn diagnostic_suggests_correction_and_lists_keys() {
    let errors = load_and_validate_str("[replicate]\nmax_pols = 3\n")
        .expect_err("should produce diagnostics");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            ..
        } => {
            assert_eq!(key, "max_pols");
            assert_eq!(suggestion.as_deref(), Some("max_polls"));
            assert!(valid_keys.contains("poll_interval_ms"));
            assert!(valid_keys.contains("model_version"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// A string where a number is expected produces an InvalidType diagnostic.
#[test]
fn diagnostic_invalid_type_message() {
    let errors = load_and_validate_str("[gateway]\nport = \"eighty\"\n")
        .expect_err("should reject wrong type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("port"))),
        "got: {errors:?}"
    );
}

/// Diagnostics render through miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::GraphicalReportHandler;

    let errors = load_and_validate_str("[agent]\nnaem = \"x\"\n").expect_err("should fail");
    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &errors[0])
        .expect("should render");
    assert!(buf.contains("naem"));
    assert!(buf.contains("name"));
}

/// Validation failures surface through the high-level entry point.
#[test]
fn load_and_validate_reports_validation_errors() {
    let errors = load_and_validate_str("[gateway]\nport = 0\n\n[replicate]\nmax_polls = 0\n")
        .expect_err("should fail validation");
    assert_eq!(errors.len(), 2);
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, ConfigError::Validation { .. }))
    );
}

/// Valid TOML passes both deserialization and validation.
#[test]
fn load_and_validate_valid_toml() {
    let config = load_and_validate_str("[agent]\nlog_level = \"warn\"\n").expect("should pass");
    assert_eq!(config.agent.log_level, "warn");
}
