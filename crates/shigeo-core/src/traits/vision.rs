// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vision adapter trait for visual-question-answering models.

use async_trait::async_trait;

use crate::error::ShigeoError;
use crate::traits::adapter::PluginAdapter;
use crate::types::VisionRequest;

/// Adapter for a visual-question-answering model.
///
/// Returns the model's raw text answer. Answers are often terse or odd and
/// are expected to be rewritten by the provider before reaching the user.
#[async_trait]
pub trait VisionAdapter: PluginAdapter {
    /// Asks a question about the referenced image.
    async fn answer(&self, request: VisionRequest) -> Result<String, ShigeoError>;
}
