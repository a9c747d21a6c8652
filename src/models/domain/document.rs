use chrono::{DateTime, Utc};

/// Text pulled out of one uploaded PDF. Lives for the duration of the
/// extraction request and is never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: usize,
    pub file_name: String,
    pub file_size: usize,
    pub extracted_at: DateTime<Utc>,
}
