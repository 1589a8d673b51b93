//! Inference - model handle shared by every request
//!
//! `ModelHandle::load` is the single entry point: it picks a backend by file
//! extension, fails fast on any problem, and yields an immutable handle that
//! callers share behind an `Arc`.

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::linear::LinearModel;
#[cfg(feature = "onnx")]
use super::onnx::OnnxModel;
use crate::error::ModelError;
use crate::features::layout::{layout_hash, FEATURE_COUNT};
use crate::features::FeatureVector;

// ============================================================================
// PREDICTOR TRAIT
// ============================================================================

/// A loaded model. Implementations must be shareable across request tasks.
pub trait Predictor: Send + Sync {
    /// Predicted correctness score for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    /// Short backend name ("onnx", "linear", ...)
    fn kind(&self) -> &'static str;
}

// ============================================================================
// METADATA
// ============================================================================

/// Facts about the loaded model, reported by the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub model_kind: String,
    pub features: usize,
    pub layout_hash: u32,
    pub loaded_at: DateTime<Utc>,
}

// ============================================================================
// HANDLE
// ============================================================================

/// Read-only model handle, loaded once at startup
pub struct ModelHandle {
    predictor: Box<dyn Predictor>,
    metadata: ModelMetadata,
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl ModelHandle {
    /// Load a model artifact; `.onnx` and `.json` are understood
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        log::info!("Loading model from: {}", path.display());

        if !path.exists() {
            return Err(ModelError::NotFound(path.display().to_string()));
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let predictor: Box<dyn Predictor> = match extension {
            "json" => Box::new(LinearModel::from_file(path)?),
            #[cfg(feature = "onnx")]
            "onnx" => Box::new(OnnxModel::from_file(path)?),
            other => {
                return Err(ModelError::UnsupportedFormat(format!(
                    "'{}' ({})",
                    other,
                    path.display()
                )))
            }
        };

        let handle = Self::from_predictor(predictor, &path.display().to_string());
        log::info!(
            "Model loaded successfully ({}, layout {:08x})",
            handle.metadata.model_kind,
            handle.metadata.layout_hash
        );
        Ok(handle)
    }

    /// Wrap an already-constructed predictor
    pub fn from_predictor(predictor: Box<dyn Predictor>, model_path: &str) -> Self {
        let metadata = ModelMetadata {
            model_path: model_path.to_string(),
            model_kind: predictor.kind().to_string(),
            features: FEATURE_COUNT,
            layout_hash: layout_hash(),
            loaded_at: Utc::now(),
        };

        Self { predictor, metadata }
    }

    /// Run the model; a non-finite score is an error
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let start_time = Instant::now();
        let score = self.predictor.predict(features)?;

        if !score.is_finite() {
            return Err(ModelError::InvalidOutput(score));
        }

        log::debug!(
            "Inference ({}) took {}us, score {:.4}",
            self.metadata.model_kind,
            start_time.elapsed().as_micros(),
            score
        );
        Ok(score)
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::derive_features;
    use crate::record::fixtures::sample_record;
    use std::io::Write;

    struct Constant(f64);

    impl Predictor for Constant {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
            Ok(self.0)
        }

        fn kind(&self) -> &'static str {
            "constant"
        }
    }

    fn sample_vector() -> FeatureVector {
        let record = sample_record();
        FeatureVector::from_parts(&record, &derive_features(&record))
    }

    fn model_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_predictor_metadata() {
        let handle = ModelHandle::from_predictor(Box::new(Constant(0.5)), "<memory>");
        assert_eq!(handle.metadata().model_kind, "constant");
        assert_eq!(handle.metadata().model_path, "<memory>");
        assert_eq!(handle.metadata().features, FEATURE_COUNT);
        assert_eq!(handle.predict(&sample_vector()).unwrap(), 0.5);
    }

    #[test]
    fn test_non_finite_score_rejected() {
        let handle = ModelHandle::from_predictor(Box::new(Constant(f64::NAN)), "<memory>");
        assert!(matches!(
            handle.predict(&sample_vector()),
            Err(ModelError::InvalidOutput(_))
        ));
    }

    #[test]
    fn test_load_linear_json() {
        let file = model_file(".json", r#"{"intercept": 0.25, "coefficients": {"avg_conf_concentrating": 0.5}}"#);
        let handle = ModelHandle::load(file.path()).unwrap();

        assert_eq!(handle.metadata().model_kind, "linear");
        let score = handle.predict(&sample_vector()).unwrap();
        assert!((score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ModelHandle::load("/nonexistent/student_model.json");
        assert!(matches!(result, Err(ModelError::NotFound(_))));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = model_file(".pkl", "not a model");
        let result = ModelHandle::load(file.path());
        assert!(matches!(result, Err(ModelError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_malformed_json() {
        let file = model_file(".json", "{ intercept: ");
        let result = ModelHandle::load(file.path());
        assert!(matches!(result, Err(ModelError::Parse(_))));
    }
}
