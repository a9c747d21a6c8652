use secrecy::SecretString;
use std::env;

use crate::models::domain::DialogueMode;

pub const DEFAULT_MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MISTRAL_MODEL: &str = "mistral-medium";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub mistral_api_key: SecretString,
    pub mistral_api_url: String,
    pub mistral_model: String,
    pub dialogue_mode: DialogueMode,
    pub llm_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            mistral_api_key: SecretString::from(
                env::var("MISTRAL_API_KEY").unwrap_or_else(|_| String::new()),
            ),
            mistral_api_url: env::var("MISTRAL_API_URL")
                .unwrap_or_else(|_| DEFAULT_MISTRAL_API_URL.to_string()),
            mistral_model: env::var("MISTRAL_MODEL")
                .unwrap_or_else(|_| DEFAULT_MISTRAL_MODEL.to_string()),
            dialogue_mode: env::var("DIALOGUE_MODE")
                .ok()
                .and_then(|m| DialogueMode::parse(&m))
                .unwrap_or_default(),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
        }
    }

    /// Warn about configuration that makes the LLM endpoints unusable. The
    /// server still boots so extraction and wake-up keep working.
    pub fn warn_on_missing_secrets(&self) {
        use secrecy::ExposeSecret;

        if self.mistral_api_key.expose_secret().is_empty() {
            log::warn!(
                "MISTRAL_API_KEY is not set. Dialogue and quiz generation will fail until it is configured."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            mistral_api_key: SecretString::from("test_api_key".to_string()),
            mistral_api_url: DEFAULT_MISTRAL_API_URL.to_string(),
            mistral_model: DEFAULT_MISTRAL_MODEL.to_string(),
            dialogue_mode: DialogueMode::PlainText,
            llm_timeout_secs: 5,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}
