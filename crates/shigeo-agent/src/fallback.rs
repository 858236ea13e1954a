// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversational answers from dialogue history alone.

use std::sync::Arc;

use shigeo_core::{ProviderAdapter, ShigeoError};

use crate::prompts;

/// Answers questions that need no visual context.
pub struct ConversationalFallback {
    provider: Arc<dyn ProviderAdapter>,
}

impl ConversationalFallback {
    pub fn new(provider: Arc<dyn ProviderAdapter>) -> Self {
        Self { provider }
    }

    /// The completion is returned verbatim.
    pub async fn answer(&self, transcript: &str) -> Result<String, ShigeoError> {
        let response = self
            .provider
            .complete(prompts::fallback_request(transcript))
            .await?;
        Ok(response.content)
    }
}
