// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt wording for answer correction and the conversational fallback.
//!
//! The wording steers model behavior and is kept verbatim.

use shigeo_core::{ProviderMessage, ProviderRequest};

/// Reply the correction step emits when it cannot produce a sound answer.
pub const APOLOGY: &str = "I'm sorry. I cannot answer.";

const CORRECTION_SYSTEM: &str = "You are an AI assistant";

const CORRECTION_HEAD: &str = "We want to create an AI assistant to assist people with visual \
impairments by answering questions related to photos taken by the user. To accomplish this, we \
use the BLIP question-answering model. However, the model's responses are sometimes very brief, \
strange, and unpredictable. Your task is to write a proper reply to a user's prompt (User) based \
on BLIP's reply (BLIP) and nothing more. If you cannot provide a proper reply for any reason, \
just say 'I'm sorry. I cannot answer.' and nothing else. Do not mention the BLIP in your \
response. See the whole dialogue for reference:\n\n";

const CORRECTION_TAIL: &str = "\nBegin.\n\n";

const CORRECTION_TEMPERATURE: f32 = 0.5;
const ANSWER_MAX_TOKENS: u32 = 64;

const FALLBACK_SYSTEM: &str = "You are an AI assistant who helps people with visual impairments.";

const FALLBACK_HEAD: &str = "You are Shigeo, an AI assistant designed to assist people with \
visual impairments. At times, you may require visual context, access to the user's camera, or \
information about the surroundings to answer some of the questions. Given the following dialogue \
with the user,\n\n";

const FALLBACK_TAIL: &str = "\nplease write reply for the last message. Write only the reply \
without quotation marks and nothing else. Begin.";

/// Rewrites a raw VQA answer into a conversational reply.
///
/// `transcript` already ends with the pending question; the question and
/// raw answer are repeated after it as a `User: .. BLIP: ..` line.
pub fn correction_request(transcript: &str, question: &str, vqa_answer: &str) -> ProviderRequest {
    let content = format!(
        "{CORRECTION_HEAD}{transcript}{CORRECTION_TAIL}User: {question} BLIP: {vqa_answer}"
    );
    ProviderRequest {
        messages: vec![
            ProviderMessage::system(CORRECTION_SYSTEM),
            ProviderMessage::user(content),
        ],
        temperature: Some(CORRECTION_TEMPERATURE),
        max_tokens: Some(ANSWER_MAX_TOKENS),
    }
}

/// Answers the last message of `transcript` without visual input.
///
/// No temperature is set so the service default applies.
pub fn fallback_request(transcript: &str) -> ProviderRequest {
    ProviderRequest {
        messages: vec![
            ProviderMessage::system(FALLBACK_SYSTEM),
            ProviderMessage::user(format!("{FALLBACK_HEAD}{transcript}{FALLBACK_TAIL}")),
        ],
        temperature: None,
        max_tokens: Some(ANSWER_MAX_TOKENS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_prompt_layout() {
        let request = correction_request("User: Q1\n", "Q1", "cup");
        assert_eq!(request.temperature, Some(0.5));
        assert_eq!(request.max_tokens, Some(64));
        assert_eq!(request.messages[0].content, "You are an AI assistant");

        let content = &request.messages[1].content;
        assert!(content.starts_with("We want to create an AI assistant"));
        assert!(content.contains("just say 'I'm sorry. I cannot answer.' and nothing else."));
        assert!(content.ends_with("for reference:\n\nUser: Q1\n\nBegin.\n\nUser: Q1 BLIP: cup"));
    }

    #[test]
    fn fallback_prompt_layout() {
        let request = fallback_request("User: hi\n");
        assert_eq!(request.temperature, None);
        assert_eq!(request.max_tokens, Some(64));
        assert_eq!(
            request.messages[0].content,
            "You are an AI assistant who helps people with visual impairments."
        );

        let content = &request.messages[1].content;
        assert!(content.starts_with("You are Shigeo, an AI assistant"));
        assert!(content.contains("with the user,\n\nUser: hi\n\nplease write reply"));
        assert!(content.ends_with("without quotation marks and nothing else. Begin."));
    }

    #[test]
    fn apology_matches_prompt_instruction() {
        assert!(
            correction_request("", "", "").messages[1]
                .content
                .contains(&format!("'{APOLOGY}'"))
        );
    }
}
