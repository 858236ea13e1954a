// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end orchestration tests.
//!
//! `TestHarness` wires an [`Orchestrator`] over a mock provider, a mock VQA
//! model, and an in-memory store, and exposes all three for assertions.

use std::sync::Arc;

use shigeo_agent::{Answer, Orchestrator};
use shigeo_core::{ImageReference, ShigeoError, UserId};
use shigeo_memory::ConversationLog;

use crate::memory_store::InMemoryStore;
use crate::mock_provider::MockProvider;
use crate::mock_vision::MockVision;

/// Image reference handed to every harness call.
pub const TEST_IMAGE: &str = "test-image.jpg";

/// Builder for [`TestHarness`].
#[derive(Default)]
pub struct TestHarnessBuilder {
    provider_responses: Vec<String>,
    vision_answers: Vec<String>,
}

impl TestHarnessBuilder {
    /// Queue LLM completions, consumed in call order (classifier first,
    /// then correction or fallback).
    pub fn with_mock_responses(mut self, responses: Vec<String>) -> Self {
        self.provider_responses = responses;
        self
    }

    /// Queue raw VQA answers.
    pub fn with_vision_answers(mut self, answers: Vec<String>) -> Self {
        self.vision_answers = answers;
        self
    }

    pub async fn build(self) -> Result<TestHarness, ShigeoError> {
        let provider = Arc::new(MockProvider::with_responses(self.provider_responses));
        let vision = Arc::new(MockVision::with_answers(self.vision_answers));
        let store = Arc::new(InMemoryStore::new());
        let orchestrator = Orchestrator::new(provider.clone(), vision.clone(), store.clone());

        Ok(TestHarness {
            provider,
            vision,
            store,
            orchestrator,
        })
    }
}

/// A complete orchestration stack over mock collaborators.
pub struct TestHarness {
    pub provider: Arc<MockProvider>,
    pub vision: Arc<MockVision>,
    pub store: Arc<InMemoryStore>,
    pub orchestrator: Orchestrator,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::default()
    }

    /// Asks `question` for `user` about [`TEST_IMAGE`].
    pub async fn ask(&self, user: &str, question: &str) -> Result<Answer, ShigeoError> {
        self.orchestrator
            .answer(
                question,
                &UserId::from(user),
                &ImageReference(TEST_IMAGE.to_string()),
            )
            .await
    }

    /// Queues a classifier verdict and the answer that should follow it.
    pub async fn script_turn(&self, verdict: &str, answer: &str) {
        self.provider.add_response(verdict).await;
        self.provider.add_response(answer).await;
    }

    /// The persisted history for `user`, as the orchestrator would load it.
    pub async fn history(&self, user: &str) -> ConversationLog {
        self.orchestrator.memory().load(&UserId::from(user)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn harness_builds_and_answers() {
        let harness = TestHarness::builder()
            .with_mock_responses(vec!["NO".into(), "Hello there.".into()])
            .build()
            .await
            .expect("harness should build");

        let answer = harness.ask("assel", "Hi").await.expect("answer");
        assert_eq!(answer.text, "Hello there.");
        assert_eq!(harness.history("assel").await.len(), 1);
    }

    #[tokio::test]
    async fn scripted_turns_follow_queue_order() {
        let harness = TestHarness::builder()
            .with_vision_answers(vec!["dog".into()])
            .build()
            .await
            .expect("harness should build");
        harness.script_turn("YES", "That's a dog.").await;

        let answer = harness.ask("assel", "What is it?").await.expect("answer");
        assert_eq!(answer.text, "That's a dog.");
        assert_eq!(harness.vision.requests().await[0].image.as_str(), TEST_IMAGE);
    }
}
