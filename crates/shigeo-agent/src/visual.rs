// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! VQA answer followed by LLM correction.

use std::sync::Arc;

use shigeo_core::{
    ImageReference, ProviderAdapter, ShigeoError, VisionAdapter, VisionRequest,
};
use tracing::debug;

use crate::prompts;

/// Fixed sampling flags the VQA model is invoked with.
const VQA_TEMPERATURE: f32 = 0.7;

/// Answers image-related questions.
///
/// The VQA model's output is terse and often odd, so it is always passed
/// through a correction prompt. A correction of [`prompts::APOLOGY`] is a
/// normal answer, not a failure.
pub struct VisualAnswerPipeline {
    vision: Arc<dyn VisionAdapter>,
    provider: Arc<dyn ProviderAdapter>,
}

impl VisualAnswerPipeline {
    pub fn new(vision: Arc<dyn VisionAdapter>, provider: Arc<dyn ProviderAdapter>) -> Self {
        Self { vision, provider }
    }

    pub async fn answer(
        &self,
        question: &str,
        image: &ImageReference,
        transcript: &str,
    ) -> Result<String, ShigeoError> {
        let raw = self.vision.answer(vqa_request(question, image)).await?;
        debug!(raw_answer = %raw, "vqa answered");

        let corrected = self
            .provider
            .complete(prompts::correction_request(transcript, question, &raw))
            .await?;
        Ok(corrected.content)
    }
}

fn vqa_request(question: &str, image: &ImageReference) -> VisionRequest {
    VisionRequest {
        image: image.clone(),
        question: question.to_string(),
        caption: false,
        use_nucleus_sampling: false,
        temperature: VQA_TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shigeo_test_utils::{MockProvider, MockVision};

    #[tokio::test]
    async fn vqa_answer_is_rewritten() {
        let vision = Arc::new(MockVision::with_answers(vec!["mug red".into()]));
        let provider = Arc::new(MockProvider::with_responses(vec![
            "It's a red mug.".into(),
        ]));
        let pipeline = VisualAnswerPipeline::new(vision.clone(), provider.clone());
        let image = ImageReference("/tmp/assel.jpg".into());

        let answer = pipeline
            .answer("What is this?", &image, "User: What is this?\n")
            .await
            .expect("answer");
        assert_eq!(answer, "It's a red mug.");

        let vqa = vision.requests().await;
        assert_eq!(
            vqa,
            vec![VisionRequest {
                image,
                question: "What is this?".into(),
                caption: false,
                use_nucleus_sampling: false,
                temperature: 0.7,
            }]
        );

        let llm = provider.requests().await;
        assert!(llm[0].messages[1].content.ends_with("User: What is this? BLIP: mug red"));
    }

    #[tokio::test]
    async fn vision_failure_skips_correction() {
        let vision = Arc::new(MockVision::new());
        vision.fail_next("prediction failed").await;
        let provider = Arc::new(MockProvider::new());
        let pipeline = VisualAnswerPipeline::new(vision, provider.clone());

        let err = pipeline
            .answer("q", &ImageReference("x".into()), "User: q\n")
            .await
            .expect_err("should fail");
        assert!(matches!(err, ShigeoError::Vision { .. }));
        assert_eq!(provider.call_count().await, 0);
    }
}
