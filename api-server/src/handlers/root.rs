//! Informational root handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
    version: &'static str,
}

pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Student Performance Analysis API - Ready to analyze learning patterns!",
        version: env!("CARGO_PKG_VERSION"),
    })
}
