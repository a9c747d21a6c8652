use serde::Deserialize;

/// Body of `POST /api/llm/generate`. Both fields stay optional strings so the
/// missing-parameter and unknown-style cases produce this API's own error
/// messages instead of a deserializer rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReedRequest {
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

/// Body of `POST /api/llm/generate-quiz`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub dialogue_text: Option<String>,
}

/// One file pulled out of the upload form, shaped for the extraction service.
#[derive(Debug, Clone)]
pub struct UploadedPdf {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
}
