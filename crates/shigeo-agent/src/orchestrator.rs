// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single entry point that answers one question for one user.
//!
//! Each call runs Load -> Route -> Generate -> Persist. Any failure aborts
//! the call; nothing is retried and no partial answer is returned.

use std::sync::Arc;

use shigeo_core::{
    ConversationStore, ConversationTurn, ImageReference, ProviderAdapter, ShigeoError, UserId,
    VisionAdapter,
};
use shigeo_memory::ConversationMemory;
use shigeo_router::{QuestionRouter, Route};
use tracing::{debug, info, warn};

use crate::fallback::ConversationalFallback;
use crate::visual::VisualAnswerPipeline;

/// States a single `answer_question` call moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    /// Loading history and rendering the transcript.
    Load,
    /// Classifying the question.
    Route,
    /// Producing the answer on the chosen path.
    Generate,
    /// Appending the turn and saving history.
    Persist,
}

impl std::fmt::Display for AnswerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerState::Load => write!(f, "load"),
            AnswerState::Route => write!(f, "route"),
            AnswerState::Generate => write!(f, "generate"),
            AnswerState::Persist => write!(f, "persist"),
        }
    }
}

/// A resolved turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub route: Route,
    /// Turns held for the user after this one was saved.
    pub turns: usize,
}

/// Ties memory, routing, and both answer paths together.
///
/// Calls for different users share nothing mutable and may run
/// concurrently. Calls for the same user must be serialized by the caller:
/// concurrent ones can each load the same history and the later save
/// silently drops the other's turn.
pub struct Orchestrator {
    memory: ConversationMemory,
    router: QuestionRouter,
    visual: VisualAnswerPipeline,
    fallback: ConversationalFallback,
}

impl Orchestrator {
    pub fn new(
        provider: Arc<dyn ProviderAdapter>,
        vision: Arc<dyn VisionAdapter>,
        store: Arc<dyn ConversationStore>,
    ) -> Self {
        Self {
            memory: ConversationMemory::new(store),
            router: QuestionRouter::new(provider.clone()),
            visual: VisualAnswerPipeline::new(vision, provider.clone()),
            fallback: ConversationalFallback::new(provider),
        }
    }

    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    /// Answers `question` about `image` and records the turn for `user`.
    pub async fn answer_question(
        &self,
        question: &str,
        user: &UserId,
        image: &ImageReference,
    ) -> Result<String, ShigeoError> {
        Ok(self.answer(question, user, image).await?.text)
    }

    /// Like [`answer_question`](Self::answer_question), also reporting the route taken.
    pub async fn answer(
        &self,
        question: &str,
        user: &UserId,
        image: &ImageReference,
    ) -> Result<Answer, ShigeoError> {
        let mut state = AnswerState::Load;
        let result = self.run(question, user, image, &mut state).await;
        if let Err(ref e) = result {
            warn!(user_id = %user, %state, error = %e, "question aborted");
        }
        result
    }

    async fn run(
        &self,
        question: &str,
        user: &UserId,
        image: &ImageReference,
        state: &mut AnswerState,
    ) -> Result<Answer, ShigeoError> {
        debug!(user_id = %user, state = %state, "answering question");
        let log = self.memory.load(user).await;
        let transcript = log.render(question);

        *state = AnswerState::Route;
        debug!(user_id = %user, state = %state, turns = log.len(), "state transition");
        let decision = self.router.route(question).await?;

        *state = AnswerState::Generate;
        debug!(user_id = %user, state = %state, route = %decision.route, "state transition");
        let text = match decision.route {
            Route::Visual => self.visual.answer(question, image, &transcript).await?,
            Route::Conversational => self.fallback.answer(&transcript).await?,
        };

        *state = AnswerState::Persist;
        debug!(user_id = %user, state = %state, "state transition");
        let log = self
            .memory
            .record(user, log, ConversationTurn::new(question, text.clone()))
            .await?;

        info!(user_id = %user, route = %decision.route, turns = log.len(), "question answered");
        Ok(Answer {
            text,
            route: decision.route,
            turns: log.len(),
        })
    }
}
