use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        llm_client::{CompletionClient, MistralClient},
        ExtractionService, PromptBuilder, QuizService, ReedService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    pub reed_service: Arc<ReedService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = Arc::new(MistralClient::new(&config)?);
        Ok(Self::with_completion_client(config, client))
    }

    /// Wires the services around any completion client. Tests hand in
    /// canned clients here; `new` hands in the real one.
    pub fn with_completion_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let prompt_builder = PromptBuilder::new(config.dialogue_mode);

        let extraction_service = Arc::new(ExtractionService::new());
        let reed_service = Arc::new(ReedService::new(client.clone(), prompt_builder.clone()));
        let quiz_service = Arc::new(QuizService::new(client, prompt_builder));

        Self {
            extraction_service,
            reed_service,
            quiz_service,
            config: Arc::new(config),
        }
    }
}
