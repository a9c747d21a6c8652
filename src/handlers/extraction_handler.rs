use actix_multipart::form::{bytes::Bytes, MultipartForm};
use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::UploadedPdf, response::ExtractionResponse},
};

#[derive(Debug, MultipartForm)]
pub struct PdfUploadForm {
    #[multipart(limit = "10MiB")]
    pub file: Option<Bytes>,
}

#[post("/api/extraction/pdf")]
pub async fn extract_pdf(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<PdfUploadForm>,
) -> Result<HttpResponse, AppError> {
    let upload = form.file.map(|file| UploadedPdf {
        file_name: file.file_name.clone().unwrap_or_default(),
        content_type: file
            .content_type
            .as_ref()
            .map(|mime| mime.essence_str().to_string()),
        bytes: file.data.to_vec(),
    });

    let document = state.extraction_service.extract_pdf_text(upload).await?;
    Ok(HttpResponse::Ok().json(ExtractionResponse::from(document)))
}
