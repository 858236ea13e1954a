// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LLM-backed relevance classification.
//!
//! Asks the provider whether replying to a question needs visual context
//! from the user's photo. The verdict is a bare `YES`/`NO` completion.

use std::sync::Arc;

use shigeo_core::{ProviderAdapter, ProviderMessage, ProviderRequest, ShigeoError};
use tracing::debug;

const SYSTEM_PROMPT: &str = "You are an AI assistant";

const PROMPT_HEAD: &str = "An AI assistant is designed to assist blind people by answering \
questions related to photos taken by the user. It utilizes the BLIP question-answering model to \
answer some of the questions. The following dialogue was provided:\n\n";

const PROMPT_TAIL: &str = "\nDetermine whether the AI assistant requires visual context or \
information about the user's surroundings to reply to the user's last message. If the AI \
assistant requires any of these, reply with 'YES'. If none of these are required, reply with \
'NO'. Please note that you can only write 'YES' or 'NO'. Begin.";

/// Token the completion must start with to count as "needs the image".
pub const AFFIRMATIVE: &str = "YES";

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 20;

/// Outcome of one classification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub image_related: bool,
    /// Completion text as returned by the provider.
    pub raw: String,
}

/// Decides whether a question needs the VQA path.
pub struct RelevanceClassifier {
    provider: Arc<dyn ProviderAdapter>,
}

impl RelevanceClassifier {
    pub fn new(provider: Arc<dyn ProviderAdapter>) -> Self {
        Self { provider }
    }

    /// Classifies `question` on its own, without prior dialogue.
    ///
    /// Provider failures propagate unchanged.
    pub async fn classify(&self, question: &str) -> Result<Verdict, ShigeoError> {
        let response = self.provider.complete(classification_request(question)).await?;
        let image_related = parse_verdict(&response.content);
        debug!(image_related, raw = %response.content, "relevance verdict");
        Ok(Verdict {
            image_related,
            raw: response.content,
        })
    }

    /// Shorthand for [`classify`](Self::classify) returning only the decision.
    pub async fn is_image_related(&self, question: &str) -> Result<bool, ShigeoError> {
        Ok(self.classify(question).await?.image_related)
    }
}

/// Builds the provider request for classifying `dialogue`.
pub fn classification_request(dialogue: &str) -> ProviderRequest {
    ProviderRequest {
        messages: vec![
            ProviderMessage::system(SYSTEM_PROMPT),
            ProviderMessage::user(format!("{PROMPT_HEAD}{dialogue}{PROMPT_TAIL}")),
        ],
        temperature: Some(TEMPERATURE),
        max_tokens: Some(MAX_TOKENS),
    }
}

/// Only an exact `YES` prefix is affirmative; anything else, including
/// lowercase or leading whitespace, routes to the conversational path.
pub fn parse_verdict(completion: &str) -> bool {
    completion.starts_with(AFFIRMATIVE)
}
