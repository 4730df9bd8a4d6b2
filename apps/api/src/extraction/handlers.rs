//! Axum route handlers for résumé upload and text extraction.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_for_display, ExtractionOutcome};

/// Multipart field carrying the uploaded résumé.
pub const UPLOAD_FIELD: &str = "file";

/// Accepts `application/pdf`, or a `.pdf` file name when the client sent no
/// content type or a generic binary one.
pub fn is_pdf_upload(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let has_pdf_name = file_name
        .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);

    match content_type.map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase()) {
        Some(ct) if ct == "application/pdf" => true,
        None => has_pdf_name,
        Some(ct) if ct == "application/octet-stream" => has_pdf_name,
        Some(_) => false,
    }
}

/// Pulls the PDF bytes out of the `file` field of a multipart body.
pub async fn read_pdf_upload(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        if !is_pdf_upload(content_type.as_deref(), file_name.as_deref()) {
            return Err(AppError::UnsupportedMediaType(format!(
                "Only PDF resumes are accepted (got {})",
                content_type.as_deref().unwrap_or("no content type")
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        info!(
            file_name = file_name.as_deref().unwrap_or("<unnamed>"),
            bytes = data.len(),
            "Resume uploaded"
        );
        return Ok(data);
    }

    Err(AppError::Validation(format!(
        "Missing '{UPLOAD_FIELD}' field with a PDF resume"
    )))
}

/// POST /api/v1/resumes/extract
///
/// Returns the extracted résumé text (for the client to show and optionally
/// edit) plus any warnings raised while reading it.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractionOutcome>, AppError> {
    let data = read_pdf_upload(multipart).await?;
    Ok(Json(extract_for_display(data).await))
}
