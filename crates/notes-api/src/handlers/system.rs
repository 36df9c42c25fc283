//! Liveness and health endpoints.

use axum::{extract::State, response::IntoResponse, Json};

use crate::AppState;

/// Plain-text liveness string served at `/`.
pub const LIVENESS_MSG: &str = "Notes API is running...";

pub async fn root() -> &'static str {
    LIVENESS_MSG
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "backend": state.store.backend(),
    }))
}
