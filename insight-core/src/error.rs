//! Error types for model loading and inference

use thiserror::Error;

/// Errors raised while loading or running a model.
///
/// Feature derivation and classification never fail; only the model can.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read model: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid model file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Feature layout mismatch: model expects hash {expected:#010x}, runtime has {actual:#010x}")]
    LayoutMismatch { expected: u32, actual: u32 },

    #[error("Unknown feature in model: {0}")]
    UnknownFeature(String),

    #[error("Failed to create session: {0}")]
    Session(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Model returned a non-finite score: {0}")]
    InvalidOutput(f64),
}
