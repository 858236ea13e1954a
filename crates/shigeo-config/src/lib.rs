// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Shigeo assistant.
//!
//! Layered TOML loading with strict key checking (`deny_unknown_fields`),
//! `SHIGEO_` environment overrides, semantic validation, and miette
//! diagnostics with typo suggestions.
//!
//! ```no_run
//! use shigeo_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("listening on {}:{}", config.gateway.host, config.gateway.port);
//! ```

pub mod credentials;
pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use credentials::resolve_secret;
pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::ShigeoConfig;

/// Load configuration from the standard hierarchy and validate it.
///
/// Figment errors are converted to diagnostics carrying source spans from
/// whichever config files exist on disk.
pub fn load_and_validate() -> Result<ShigeoConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Load configuration from an inline TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<ShigeoConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Read every config file that exists, for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join("shigeo.toml"))
        .unwrap_or_else(|_| "shigeo.toml".into());

    [Some(local), loader::user_config_path(), Some(loader::system_config_path())]
        .into_iter()
        .flatten()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}
