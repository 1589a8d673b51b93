//! Model Module - Inference Engine
//!
//! Loads the model artifact once and runs it over feature vectors.
//! Swapping the artifact format only touches this module.

pub mod inference;
pub mod linear;
#[cfg(feature = "onnx")]
pub mod onnx;

// Re-export common types
pub use inference::{ModelHandle, ModelMetadata, Predictor};
pub use linear::LinearModel;
#[cfg(feature = "onnx")]
pub use onnx::OnnxModel;
