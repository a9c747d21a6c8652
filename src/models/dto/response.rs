use chrono::SecondsFormat;
use serde::Serialize;

use crate::models::domain::{ExtractedDocument, GeneratedReed, QuizQuestion, TeachingStyle};

#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResponse {
    pub success: bool,
    pub data: ExtractionData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionData {
    pub text: String,
    pub page_count: usize,
    pub file_name: String,
    pub file_size: usize,
    pub timestamp: String,
}

impl From<ExtractedDocument> for ExtractionResponse {
    fn from(document: ExtractedDocument) -> Self {
        ExtractionResponse {
            success: true,
            data: ExtractionData {
                text: document.text,
                page_count: document.page_count,
                file_name: document.file_name,
                file_size: document.file_size,
                timestamp: document
                    .extracted_at
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReedResponse {
    pub success: bool,
    pub generated_text: String,
    pub style: TeachingStyle,
}

impl From<GeneratedReed> for ReedResponse {
    fn from(reed: GeneratedReed) -> Self {
        ReedResponse {
            success: true,
            generated_text: reed.text,
            style: reed.style,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub questions: Vec<QuizQuestion>,
}

impl QuizResponse {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        QuizResponse {
            success: true,
            questions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WakeUpResponse {
    pub status: String,
    pub timestamp: i64,
}
