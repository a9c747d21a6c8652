use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid style '{0}'. Choose \"Socratic\", \"Platonic\" or \"Story\"")]
    InvalidStyle(String),

    #[error("Error processing PDF: {0}")]
    ExtractionFailed(String),

    #[error("Failed to reach LLM API: {0}")]
    TransportError(String),

    #[error("Invalid response from LLM API: {0}")]
    UpstreamError(String),

    #[error("LLM returned malformed quiz JSON: {0}")]
    MalformedOutput(String),

    #[error("Generated quiz failed validation: {0}")]
    SchemaViolation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::InvalidStyle(_) => "INVALID_STYLE",
            AppError::ExtractionFailed(_) => "EXTRACTION_FAILED",
            AppError::TransportError(_) => "TRANSPORT_ERROR",
            AppError::UpstreamError(_) => "UPSTREAM_ERROR",
            AppError::MalformedOutput(_) => "MALFORMED_OUTPUT",
            AppError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Error envelope shared by every endpoint. Clients branch on `success` and
/// surface `error` verbatim.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidStyle(_) => StatusCode::BAD_REQUEST,
            AppError::ExtractionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TransportError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedOutput(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SchemaViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("[{}] {}", self.error_code(), self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.to_string(),
        })
    }
}

impl From<lopdf::Error> for AppError {
    fn from(err: lopdf::Error) -> Self {
        AppError::ExtractionFailed(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::TransportError(err.to_string())
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::Internal(format!("Blocking task failed: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ExtractionFailed(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
