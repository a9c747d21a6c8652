use crate::constants::prompts::{
    MAX_PROMPT_CHARS, PLAIN_TEXT_FORMAT_PROMPT, STRUCTURED_FORMAT_PROMPT, TRUNCATION_MARKER,
};
use crate::constants::quiz_prompt::QUIZ_GENERATOR_PROMPT;
use crate::models::domain::{DialogueMode, TeachingStyle};
use crate::services::llm_client::ChatMessage;

/// Turns source text into the two-message conversation the completion
/// endpoint expects. The dialogue mode is fixed at construction so callers
/// never branch on it.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    mode: DialogueMode,
}

impl PromptBuilder {
    pub fn new(mode: DialogueMode) -> Self {
        Self { mode }
    }

    pub fn build_dialogue_prompt(
        &self,
        source_text: &str,
        style: TeachingStyle,
    ) -> Vec<ChatMessage> {
        let format_prompt = match self.mode {
            DialogueMode::Structured => STRUCTURED_FORMAT_PROMPT,
            DialogueMode::PlainText => PLAIN_TEXT_FORMAT_PROMPT,
        };
        let system = format!("{}\n\n{}", style.system_prompt(), format_prompt);

        vec![
            ChatMessage::system(system),
            ChatMessage::user(truncate_source(source_text)),
        ]
    }

    pub fn build_quiz_prompt(&self, dialogue_text: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(QUIZ_GENERATOR_PROMPT),
            ChatMessage::user(truncate_source(dialogue_text)),
        ]
    }
}

/// Cuts the text at [`MAX_PROMPT_CHARS`] characters and appends the marker.
/// Text at or under the limit passes through byte-for-byte.
pub fn truncate_source(text: &str) -> String {
    match text.char_indices().nth(MAX_PROMPT_CHARS) {
        Some((byte_index, _)) => {
            let mut truncated = text[..byte_index].to_string();
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => text.to_string(),
    }
}
