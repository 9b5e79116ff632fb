//! Axum route handlers for the resume analysis endpoint.

use anyhow::anyhow;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde_json::json;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::analysis::extractor::extract_text;
use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::analysis::scoring::calculate_resume_score;
use crate::errors::AppError;
use crate::state::AppState;

/// OPTIONS /analyzeResume
pub async fn handle_preflight() -> impl IntoResponse {
    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST"),
        ],
        Json(json!({ "message": "Preflight request successful" })),
    )
}

/// POST /analyzeResume
///
/// Download → extract → match → score. The body is parsed by hand so that a
/// malformed payload maps to the generic 500 rather than axum's rejection.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, AppError> {
    let request_id = Uuid::new_v4();

    let request: AnalysisRequest = serde_json::from_slice(&body)
        .map_err(|e| anyhow!("Invalid request body: {e}"))?;
    info!(%request_id, "Received request: {:?}", request.resume_url);

    let resume_url = request.url()?;

    let resume_file = state.fetcher.fetch(resume_url, request_id).await?;

    let resume_text = extract_text(resume_file.path())
        .await
        .unwrap_or_else(|e| {
            error!(%request_id, "Error extracting text: {e}");
            String::new()
        });

    if let Err(e) = resume_file.close() {
        warn!(%request_id, "Failed to remove temporary resume file: {e}");
    }

    let skills = state.vocabulary.extract_skills(&resume_text);
    let score = calculate_resume_score(&skills);
    debug!(%request_id, "Matched skills [{skills}] -> score {}", score.as_str());

    Ok(Json(AnalysisResult { skills, score }))
}
