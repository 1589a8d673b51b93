//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use insight_core::ModelError;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Body is not parseable JSON
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Body sent without `Content-Type: application/json`
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Well-formed JSON with a missing, mistyped or out-of-range field
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Model error: {0}")]
    ModelError(#[from] ModelError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg.clone()),
            AppError::ValidationError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::ModelError(err) => {
                tracing::error!("Prediction error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Prediction failed".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::ValidationError(err.body_text()),
            JsonRejection::MissingJsonContentType(err) => AppError::UnsupportedMediaType(err.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}
