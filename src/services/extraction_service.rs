use std::io::Write as _;
use std::path::{Path, PathBuf};

use actix_web::web;
use chrono::Utc;
use lopdf::Document;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::ExtractedDocument, dto::request::UploadedPdf},
};

const PDF_MIME_TYPE: &str = "application/pdf";
const TEMP_FILE_PREFIX: &str = "socrati-pdf-";

/// Wraps the PDF library behind the upload contract: reject non-PDF input
/// before touching the filesystem, extract against a scoped temporary file,
/// and return per-page text joined by blank lines.
pub struct ExtractionService {
    temp_dir: PathBuf,
}

impl ExtractionService {
    pub fn new() -> Self {
        Self {
            temp_dir: std::env::temp_dir(),
        }
    }

    pub fn with_temp_dir(temp_dir: PathBuf) -> Self {
        Self { temp_dir }
    }

    pub async fn extract_pdf_text(&self, upload: Option<UploadedPdf>) -> AppResult<ExtractedDocument> {
        let upload =
            upload.ok_or_else(|| AppError::InvalidInput("No PDF file uploaded".to_string()))?;

        if upload.content_type.as_deref() != Some(PDF_MIME_TYPE) {
            return Err(AppError::InvalidInput("Uploaded file is not a PDF".to_string()));
        }

        log::info!(
            "Extracting text from '{}' ({} bytes)",
            upload.file_name,
            upload.bytes.len()
        );

        let temp_dir = self.temp_dir.clone();
        let file_size = upload.bytes.len();
        let bytes = upload.bytes;
        let (text, page_count) = web::block(move || write_and_extract(&temp_dir, &bytes)).await??;

        log::info!(
            "Extracted {} characters across {} page(s) from '{}'",
            text.len(),
            page_count,
            upload.file_name
        );

        Ok(ExtractedDocument {
            text,
            page_count,
            file_name: upload.file_name,
            file_size,
            extracted_at: Utc::now(),
        })
    }
}

/// Writes the upload to a uniquely-named temporary file and extracts from it.
/// The file is removed when the guard drops, on the error paths included.
fn write_and_extract(temp_dir: &Path, bytes: &[u8]) -> AppResult<(String, usize)> {
    let mut temp_file = tempfile::Builder::new()
        .prefix(&format!("{}{}-", TEMP_FILE_PREFIX, Uuid::new_v4()))
        .suffix(".pdf")
        .tempfile_in(temp_dir)?;
    temp_file.write_all(bytes)?;

    extract_from_path(temp_file.path())
}

fn extract_from_path(path: &Path) -> AppResult<(String, usize)> {
    let document = Document::load(path)?;

    let pages = document.get_pages();
    let page_count = pages.len();

    let mut parts = Vec::with_capacity(page_count);
    for page_number in pages.keys() {
        let page_text = document.extract_text(&[*page_number])?;
        parts.push(page_text.trim().to_string());
    }

    Ok((parts.join("\n\n"), page_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{pdf_with_pages, sample_pdf_bytes};

    fn upload(bytes: Vec<u8>, content_type: &str) -> Option<UploadedPdf> {
        Some(UploadedPdf {
            bytes,
            file_name: "sample.pdf".to_string(),
            content_type: Some(content_type.to_string()),
        })
    }

    #[actix_web::test]
    async fn extracts_text_and_page_count_from_valid_pdf() {
        let temp_dir = tempfile::tempdir().expect("temp dir should be created");
        let service = ExtractionService::with_temp_dir(temp_dir.path().to_path_buf());

        let document = service
            .extract_pdf_text(upload(sample_pdf_bytes(), "application/pdf"))
            .await
            .expect("extraction should succeed");

        assert_eq!(document.page_count, 1);
        assert!(document.text.contains("Hello from Socrati"));
        assert_eq!(document.file_name, "sample.pdf");
        assert!(document.file_size > 0);

        let leftover = std::fs::read_dir(temp_dir.path())
            .expect("temp dir should be readable")
            .count();
        assert_eq!(leftover, 0, "temporary file must not outlive the call");
    }

    #[actix_web::test]
    async fn joins_pages_with_blank_lines() {
        let temp_dir = tempfile::tempdir().expect("temp dir should be created");
        let service = ExtractionService::with_temp_dir(temp_dir.path().to_path_buf());
        let bytes = pdf_with_pages(&["First page text", "Second page text"]);

        let document = service
            .extract_pdf_text(upload(bytes, "application/pdf"))
            .await
            .expect("extraction should succeed");

        assert_eq!(document.page_count, 2);
        let first = document
            .text
            .find("First page text")
            .expect("first page text present");
        let second = document
            .text
            .find("Second page text")
            .expect("second page text present");
        assert!(first < second);
        assert!(document.text.contains("\n\n"));
    }

    #[actix_web::test]
    async fn missing_file_is_invalid_input() {
        let service = ExtractionService::new();

        let result = service.extract_pdf_text(None).await;
        match result {
            Err(AppError::InvalidInput(message)) => assert_eq!(message, "No PDF file uploaded"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn wrong_mime_type_is_invalid_input() {
        let service = ExtractionService::new();

        let result = service
            .extract_pdf_text(upload(sample_pdf_bytes(), "text/plain"))
            .await;
        match result {
            Err(AppError::InvalidInput(message)) => {
                assert_eq!(message, "Uploaded file is not a PDF")
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn garbage_bytes_fail_extraction_and_clean_up() {
        let temp_dir = tempfile::tempdir().expect("temp dir should be created");
        let service = ExtractionService::with_temp_dir(temp_dir.path().to_path_buf());

        let result = service
            .extract_pdf_text(upload(b"definitely not a pdf".to_vec(), "application/pdf"))
            .await;
        assert!(matches!(result, Err(AppError::ExtractionFailed(_))));

        let leftover = std::fs::read_dir(temp_dir.path())
            .expect("temp dir should be readable")
            .count();
        assert_eq!(leftover, 0, "temporary file must not outlive the failure");
    }
}
