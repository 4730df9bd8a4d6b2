//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::report::{content_disposition, render_report, REPORT_MIME_TYPE};
use crate::analysis::requester::generate_analysis;
use crate::errors::AppError;
use crate::extraction::extract_for_display;
use crate::extraction::handlers::read_pdf_upload;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct UploadAnalysisResponse {
    pub extracted_text: String,
    pub warnings: Vec<String>,
    pub analysis: AnalysisResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Analyzes résumé text the client already holds (possibly edited after
/// extraction). Always answers 200 with all three sections populated.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalysisResult> {
    Json(generate_analysis(&request.resume_text, state.model.as_ref()).await)
}

/// POST /api/v1/resumes/analyze/upload
///
/// Full pipeline in one call: extract → analyze. An unreadable PDF is
/// reported in `warnings` and analyzed as empty text.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadAnalysisResponse>, AppError> {
    let data = read_pdf_upload(multipart).await?;
    let outcome = extract_for_display(data).await;
    let analysis = generate_analysis(&outcome.extracted_text, state.model.as_ref()).await;

    Ok(Json(UploadAnalysisResponse {
        extracted_text: outcome.extracted_text,
        warnings: outcome.warnings,
        analysis,
    }))
}

/// POST /api/v1/resumes/report
///
/// Renders an analysis as the downloadable `AI_Resume_Analysis.txt`.
pub async fn handle_report(Json(result): Json<AnalysisResult>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, REPORT_MIME_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition()),
        ],
        render_report(&result),
    )
}
