use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{GeneratedReed, TeachingStyle},
        dto::request::GenerateReedRequest,
    },
    services::{llm_client::CompletionClient, prompt_builder::PromptBuilder},
};

pub struct ReedService {
    client: Arc<dyn CompletionClient>,
    prompt_builder: PromptBuilder,
}

impl ReedService {
    pub fn new(client: Arc<dyn CompletionClient>, prompt_builder: PromptBuilder) -> Self {
        Self {
            client,
            prompt_builder,
        }
    }

    /// Validates the request, builds the styled prompt and relays the model's
    /// dialogue back verbatim. No parsing happens here in either mode; the
    /// quiz path is the only consumer that inspects model output.
    pub async fn generate_reed(&self, request: GenerateReedRequest) -> AppResult<GeneratedReed> {
        let extracted_text = request.extracted_text.unwrap_or_default();
        let style_value = request.style.unwrap_or_default();

        if extracted_text.is_empty() || style_value.is_empty() {
            return Err(AppError::InvalidInput(
                "Missing required parameters: extractedText and style".to_string(),
            ));
        }

        let style: TeachingStyle = style_value.parse()?;

        log::info!(
            "Generating {} reed from {} characters of source text",
            style,
            extracted_text.chars().count()
        );

        let messages = self
            .prompt_builder
            .build_dialogue_prompt(&extracted_text, style);
        let text = self.client.complete(messages).await?;

        Ok(GeneratedReed { text, style })
    }
}
