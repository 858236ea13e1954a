// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Question routing for the Shigeo assistant.
//!
//! - [`RelevanceClassifier`]: asks the LLM whether a question needs the photo
//! - [`QuestionRouter`]: turns that verdict into a [`Route`]

pub mod classifier;
pub mod router;

pub use classifier::{RelevanceClassifier, Verdict, classification_request, parse_verdict};
pub use router::{QuestionRouter, Route, RoutingDecision};
