pub mod extraction_service;
pub mod llm_client;
pub mod prompt_builder;
pub mod quiz_service;
pub mod reed_service;

pub use extraction_service::ExtractionService;
pub use llm_client::{ChatMessage, CompletionClient, MistralClient};
pub use prompt_builder::PromptBuilder;
pub use quiz_service::QuizService;
pub use reed_service::ReedService;
