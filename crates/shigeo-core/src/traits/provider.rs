// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for chat-completion LLM services.

use async_trait::async_trait;

use crate::error::ShigeoError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{ProviderRequest, ProviderResponse};

/// Adapter for a chat-completion language model.
///
/// Used for relevance classification, answer correction, and the
/// conversational fallback.
#[async_trait]
pub trait ProviderAdapter: PluginAdapter {
    /// Sends a completion request and returns the full response.
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ShigeoError>;
}
