// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversation log and its transcript rendering.

use serde::{Deserialize, Serialize};
use shigeo_core::ConversationTurn;

/// Maximum number of turns retained per user.
pub const MAX_TURNS: usize = 10;

/// Chronological list of a user's turns.
///
/// Serializes as a bare JSON array of `{question, answer}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Adds `turn` after every existing turn.
    pub fn append(mut self, turn: ConversationTurn) -> Self {
        self.turns.push(turn);
        self
    }

    /// Drops the oldest turns until at most [`MAX_TURNS`] remain.
    pub fn truncate(mut self) -> Self {
        if self.turns.len() > MAX_TURNS {
            let excess = self.turns.len() - MAX_TURNS;
            self.turns.drain(..excess);
        }
        self
    }

    /// Renders the log followed by the pending question as model input.
    ///
    /// Each prior turn becomes a `User:` line and an `Assistant:` line; the
    /// pending question closes the transcript as a final `User:` line with
    /// no assistant line after it. Every prompt that embeds dialogue uses
    /// this exact shape.
    pub fn render(&self, pending_question: &str) -> String {
        let mut transcript = String::new();
        for turn in &self.turns {
            transcript.push_str("User: ");
            transcript.push_str(&turn.question);
            transcript.push_str("\nAssistant: ");
            transcript.push_str(&turn.answer);
            transcript.push('\n');
        }
        transcript.push_str("User: ");
        transcript.push_str(pending_question);
        transcript.push('\n');
        transcript
    }
}

impl From<Vec<ConversationTurn>> for ConversationLog {
    fn from(turns: Vec<ConversationTurn>) -> Self {
        Self { turns }
    }
}
