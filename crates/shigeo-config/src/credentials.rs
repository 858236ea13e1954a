// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential lookup: config value first, then a well-known env var.

use secrecy::SecretString;
use shigeo_core::ShigeoError;

/// Resolves a credential from `configured`, falling back to `env_var`.
///
/// Empty strings count as unset in both places.
pub fn resolve_secret(
    configured: &Option<String>,
    env_var: &str,
    config_key: &str,
) -> Result<SecretString, ShigeoError> {
    if let Some(value) = configured.as_deref().filter(|v| !v.is_empty()) {
        return Ok(SecretString::from(value.to_string()));
    }

    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => Ok(SecretString::from(value)),
        _ => Err(ShigeoError::Config(format!(
            "credential not found. Set {config_key} in config or the {env_var} environment variable."
        ))),
    }
}
