use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::fetcher::FetchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume URL provided")]
    MissingResumeUrl,

    #[error("Failed to download resume: {0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingResumeUrl => {
                tracing::error!("No resume URL provided");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "No resume URL provided" }),
                )
            }
            AppError::Fetch(e) => {
                tracing::error!("Failed to download resume: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to download resume" }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Unexpected error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Internal server error",
                        "details": e.to_string()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
