// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Question answering for the Shigeo assistant.
//!
//! The [`Orchestrator`] loads a user's history, routes the question, runs
//! either the [`VisualAnswerPipeline`] or the [`ConversationalFallback`],
//! and saves the resulting turn.

pub mod fallback;
pub mod orchestrator;
pub mod prompts;
pub mod visual;

pub use fallback::ConversationalFallback;
pub use orchestrator::{Answer, AnswerState, Orchestrator};
pub use prompts::APOLOGY;
pub use visual::VisualAnswerPipeline;
pub use shigeo_router::Route;
