// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route selection between the visual and conversational answer paths.

use std::sync::Arc;

use shigeo_core::{ProviderAdapter, ShigeoError};
use tracing::info;

use crate::classifier::RelevanceClassifier;

/// Which generation path answers a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Ask the VQA model, then rewrite its answer with the LLM.
    Visual,
    /// Answer from dialogue history alone.
    Conversational,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Visual => write!(f, "visual"),
            Route::Conversational => write!(f, "conversational"),
        }
    }
}

impl From<bool> for Route {
    fn from(image_related: bool) -> Self {
        if image_related {
            Route::Visual
        } else {
            Route::Conversational
        }
    }
}

/// Routing decision plus the classifier output that produced it.
#[derive(Debug, Clone)]
pub struct RoutingDecision {
    pub route: Route,
    pub classifier_output: String,
}

/// Picks a [`Route`] for each question.
pub struct QuestionRouter {
    classifier: RelevanceClassifier,
}

impl QuestionRouter {
    pub fn new(provider: Arc<dyn ProviderAdapter>) -> Self {
        Self {
            classifier: RelevanceClassifier::new(provider),
        }
    }

    /// Routes `question`. Only the question is classified, not the transcript.
    pub async fn route(&self, question: &str) -> Result<RoutingDecision, ShigeoError> {
        let verdict = self.classifier.classify(question).await?;
        let route = Route::from(verdict.image_related);
        info!(%route, classifier_output = %verdict.raw, "question routed");
        Ok(RoutingDecision {
            route,
            classifier_output: verdict.raw,
        })
    }
}
