//! ONNX Runtime backend
//!
//! Expects a regressor exported with a single `[1, FEATURE_COUNT]` f32
//! input; the first value of the first output is the score.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::inference::Predictor;
use crate::error::ModelError;
use crate::features::layout::FEATURE_COUNT;
use crate::features::FeatureVector;

/// ONNX session; `run` needs `&mut`, hence the mutex
pub struct OnnxModel {
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxModel {
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let session = Session::builder()
            .map_err(|e| ModelError::Session(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Session(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelError::Session(format!("Failed to load model: {}", e)))?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelError::Session("No output defined".to_string()))?;

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl Predictor for OnnxModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.to_f32().to_vec())
            .map_err(|e| ModelError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| ModelError::Inference("No output".to_string()))?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("Extract error: {}", e)))?;

        data.first()
            .map(|&score| score as f64)
            .ok_or_else(|| ModelError::Inference("Empty output tensor".to_string()))
    }

    fn kind(&self) -> &'static str {
        "onnx"
    }
}
