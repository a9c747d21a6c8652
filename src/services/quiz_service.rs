use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::QuizQuestion, dto::request::GenerateQuizRequest},
    services::{llm_client::CompletionClient, prompt_builder::PromptBuilder},
};

pub const QUIZ_QUESTION_COUNT: usize = 5;
pub const QUIZ_OPTION_COUNT: usize = 4;

static CODE_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json)?").unwrap());

pub struct QuizService {
    client: Arc<dyn CompletionClient>,
    prompt_builder: PromptBuilder,
}

impl QuizService {
    pub fn new(client: Arc<dyn CompletionClient>, prompt_builder: PromptBuilder) -> Self {
        Self {
            client,
            prompt_builder,
        }
    }

    /// Asks the model for a quiz over the supplied dialogue and validates its
    /// answer strictly. Unlike the dialogue path, anything that fails the
    /// structural contract rejects the whole batch.
    pub async fn generate_quiz(&self, request: GenerateQuizRequest) -> AppResult<Vec<QuizQuestion>> {
        let dialogue_text = request.dialogue_text.unwrap_or_default();
        if dialogue_text.is_empty() {
            return Err(AppError::InvalidInput(
                "Missing required parameter: dialogueText".to_string(),
            ));
        }

        log::info!(
            "Generating quiz from {} characters of dialogue",
            dialogue_text.chars().count()
        );

        let messages = self.prompt_builder.build_quiz_prompt(&dialogue_text);
        let raw = self.client.complete(messages).await?;

        parse_quiz_response(&raw)
    }
}

/// Strips code-fence markers, parses the text as JSON and enforces the quiz
/// contract: exactly 5 questions, each with a non-empty question, exactly 4
/// string options and a non-empty correctAnswer. The first violation rejects
/// the whole response.
pub fn parse_quiz_response(raw: &str) -> AppResult<Vec<QuizQuestion>> {
    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(&cleaned).map_err(|e| {
        log::error!("LLM returned unparseable quiz JSON: {}", raw);
        AppError::MalformedOutput(e.to_string())
    })?;

    let items = value
        .as_array()
        .ok_or_else(|| AppError::SchemaViolation("quiz response is not an array".to_string()))?;

    if items.len() != QUIZ_QUESTION_COUNT {
        return Err(AppError::SchemaViolation(format!(
            "expected exactly {} questions, got {}",
            QUIZ_QUESTION_COUNT,
            items.len()
        )));
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_question(index, item))
        .collect()
}

fn parse_question(index: usize, item: &serde_json::Value) -> AppResult<QuizQuestion> {
    let number = index + 1;

    let question = item
        .get("question")
        .and_then(|q| q.as_str())
        .filter(|q| !q.is_empty())
        .ok_or_else(|| {
            AppError::SchemaViolation(format!("question {} is missing its question text", number))
        })?;

    let options = item
        .get("options")
        .and_then(|o| o.as_array())
        .ok_or_else(|| {
            AppError::SchemaViolation(format!("question {} is missing its options", number))
        })?;

    if options.len() != QUIZ_OPTION_COUNT {
        return Err(AppError::SchemaViolation(format!(
            "question {} must have exactly {} options, got {}",
            number,
            QUIZ_OPTION_COUNT,
            options.len()
        )));
    }

    let options = options
        .iter()
        .map(|option| {
            option.as_str().map(str::to_string).ok_or_else(|| {
                AppError::SchemaViolation(format!("question {} has a non-string option", number))
            })
        })
        .collect::<AppResult<Vec<String>>>()?;

    let correct_answer = item
        .get("correctAnswer")
        .and_then(|a| a.as_str())
        .filter(|a| !a.is_empty())
        .ok_or_else(|| {
            AppError::SchemaViolation(format!("question {} is missing correctAnswer", number))
        })?;

    Ok(QuizQuestion {
        question: question.to_string(),
        options,
        correct_answer: correct_answer.to_string(),
    })
}

fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE_RE.replace_all(raw, "").trim().to_string()
}
