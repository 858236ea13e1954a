// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `/etc/shigeo/shigeo.toml`, then `<config_dir>/shigeo/shigeo.toml`,
//! then `./shigeo.toml`, with `SHIGEO_` environment variables applied last.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ShigeoConfig;

/// Section names recognised by the environment provider.
const ENV_SECTIONS: &[&str] = &["agent", "openai", "replicate", "storage", "gateway"];

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/shigeo/shigeo.toml`
/// 3. `<config_dir>/shigeo/shigeo.toml`
/// 4. `./shigeo.toml`
/// 5. `SHIGEO_*` environment variables
pub fn load_config() -> Result<ShigeoConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from an inline TOML string over the defaults.
///
/// No files or environment variables are consulted.
pub fn load_config_from_str(toml_content: &str) -> Result<ShigeoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShigeoConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ShigeoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShigeoConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ShigeoConfig::default()))
        .merge(Toml::file(system_config_path()))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file("shigeo.toml"))
        .merge(env_provider())
}

pub(crate) fn system_config_path() -> PathBuf {
    PathBuf::from("/etc/shigeo/shigeo.toml")
}

pub(crate) fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("shigeo").join("shigeo.toml"))
}

/// Environment provider with explicit section-to-dot mapping.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `SHIGEO_OPENAI_API_KEY` maps to `openai.api_key` and
/// `SHIGEO_REPLICATE_MAX_POLLS` maps to `replicate.max_polls`.
fn env_provider() -> Env {
    Env::prefixed("SHIGEO_").map(|key| map_env_key(key.as_str()).into())
}

/// figment hands over keys in their original (upper) case.
pub(crate) fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ENV_SECTIONS {
        if let Some(rest) = key.strip_prefix(section) {
            if let Some(field) = rest.strip_prefix('_') {
                return format!("{section}.{field}");
            }
        }
    }
    key
}
