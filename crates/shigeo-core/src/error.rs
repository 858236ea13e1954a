// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Shigeo assistant.

use thiserror::Error;

/// The primary error type used across all Shigeo adapter traits and core operations.
#[derive(Debug, Error)]
pub enum ShigeoError {
    /// Configuration errors (invalid TOML, missing credentials, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Conversation store errors (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// LLM provider errors (API failure, quota, malformed response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Visual-question-answering service errors.
    #[error("vision error: {message}")]
    Vision {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image ingestion errors (undecodable upload, unreadable reference).
    #[error("image error: {message}")]
    Image {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Inbound transport errors (bind failure, server error).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Caller-supplied input was rejected before any external call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ShigeoError {
    /// Whether the failure originated in an upstream model service.
    ///
    /// The HTTP boundary reports these as bad-gateway rather than as
    /// internal failures.
    pub fn is_upstream(&self) -> bool {
        matches!(self, ShigeoError::Provider { .. } | ShigeoError::Vision { .. })
    }

    /// Whether the failure was caused by the caller's request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ShigeoError::InvalidInput(_) | ShigeoError::Image { .. })
    }
}
