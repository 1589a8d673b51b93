//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
    model_kind: String,
    environment: String,
    version: &'static str,
    timestamp: i64,
}

/// The server only starts once the model has loaded, so reaching this
/// handler means the model is available.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: true,
        model_kind: state.model.metadata().model_kind.clone(),
        environment: state.config.environment.clone(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
