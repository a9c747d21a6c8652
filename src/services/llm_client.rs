use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

pub const LLM_TEMPERATURE: f64 = 0.7;
pub const LLM_MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

/// Seam between the prompt pipeline and the remote chat-completion endpoint.
/// One call, one attempt; retry policy is the caller's problem and nobody
/// here has one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> AppResult<String>;
}

pub struct MistralClient {
    http: reqwest::Client,
    api_url: String,
    api_key: SecretString,
    model: String,
}

impl MistralClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_url: config.mistral_api_url.clone(),
            api_key: config.mistral_api_key.clone(),
            model: config.mistral_model.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for MistralClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> AppResult<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages: &messages,
            temperature: LLM_TEMPERATURE,
            max_tokens: LLM_MAX_TOKENS,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach LLM endpoint: {}", e);
                AppError::TransportError(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log::error!("Failed to read LLM response body: {}", e);
            AppError::TransportError(format!("failed to read response body: {}", e))
        })?;

        // Upstream errors (auth failures, quota, model errors) come back as
        // JSON bodies without a choices array. Judge the body, not the status.
        extract_completion_text(&body).map_err(|err| {
            log::error!("Unexpected LLM API response (status {}): {}", status, body);
            err
        })
    }
}

/// Pulls the first completion choice out of a chat-completion response body.
pub(crate) fn extract_completion_text(body: &str) -> AppResult<String> {
    let value = serde_json::from_str::<serde_json::Value>(body)
        .map_err(|_| AppError::UpstreamError("response body is not JSON".to_string()))?;

    let content = value
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or_else(|| AppError::UpstreamError("no completion choice in response".to_string()))?;

    Ok(content.to_string())
}
