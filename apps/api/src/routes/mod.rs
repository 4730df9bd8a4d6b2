pub mod health;

use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};

use crate::analysis::handlers;
use crate::extraction::handlers::handle_extract;
use crate::state::AppState;

/// Upper bound for an uploaded résumé.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/extract", post(handle_extract))
        .route("/api/v1/resumes/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/resumes/analyze/upload",
            post(handlers::handle_analyze_upload),
        )
        .route("/api/v1/resumes/report", post(handlers::handle_report))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
