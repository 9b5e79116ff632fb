pub mod health;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::analysis::handlers;
use crate::state::AppState;

/// Every response, errors included, carries `Access-Control-Allow-Origin: *`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route(
            "/analyzeResume",
            post(handlers::handle_analyze_resume).options(handlers::handle_preflight),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
