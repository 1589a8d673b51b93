//! Linear model backend
//!
//! A JSON artifact holding an intercept and one coefficient per feature
//! name, e.g. exported from a fitted linear regressor:
//!
//! ```json
//! { "intercept": 0.41, "coefficients": { "hint_dependency": -0.12 }, "layout_hash": 123 }
//! ```
//!
//! Missing coefficients are zero; unknown names are rejected.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::inference::Predictor;
use crate::error::ModelError;
use crate::features::layout::{check_layout_hash, feature_index, FEATURE_COUNT};
use crate::features::FeatureVector;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LinearModelFile {
    intercept: f64,
    #[serde(default)]
    coefficients: HashMap<String, f64>,
    #[serde(default)]
    layout_hash: Option<u32>,
}

/// `intercept + sum(weight_i * feature_i)`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    intercept: f64,
    weights: [f64; FEATURE_COUNT],
}

impl LinearModel {
    pub fn new(intercept: f64, weights: [f64; FEATURE_COUNT]) -> Self {
        Self { intercept, weights }
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let file: LinearModelFile = serde_json::from_str(json)?;

        if let Some(hash) = file.layout_hash {
            check_layout_hash(hash)?;
        }

        let mut weights = [0.0; FEATURE_COUNT];
        for (name, weight) in file.coefficients {
            let index = feature_index(&name).ok_or(ModelError::UnknownFeature(name))?;
            weights[index] = weight;
        }

        Ok(Self::new(file.intercept, weights))
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let sum: f64 = self
            .weights
            .iter()
            .zip(features.as_slice())
            .map(|(w, v)| w * v)
            .sum();
        Ok(self.intercept + sum)
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::layout::layout_hash;
    use crate::features::derive_features;
    use crate::record::fixtures::sample_record;

    fn sample_vector() -> FeatureVector {
        let record = sample_record();
        FeatureVector::from_parts(&record, &derive_features(&record))
    }

    #[test]
    fn test_weighted_sum() {
        let model = LinearModel::from_json(
            r#"{"intercept": 0.1, "coefficients": {"hint_count": 0.1, "efficiency_indicator": 0.2}}"#,
        )
        .unwrap();
        // 0.1 + 0.1 * 2 + 0.2 * 1.25
        let score = model.predict(&sample_vector()).unwrap();
        assert!((score - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_intercept_only() {
        let model = LinearModel::from_json(r#"{"intercept": 0.42}"#).unwrap();
        assert_eq!(model.predict(&sample_vector()).unwrap(), 0.42);
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let result = LinearModel::from_json(r#"{"intercept": 0.0, "coefficients": {"action_level": 1.0}}"#);
        assert!(matches!(result, Err(ModelError::UnknownFeature(name)) if name == "action_level"));
    }

    #[test]
    fn test_layout_hash_checked() {
        let ok = format!(r#"{{"intercept": 0.0, "layout_hash": {}}}"#, layout_hash());
        assert!(LinearModel::from_json(&ok).is_ok());

        let stale = format!(r#"{{"intercept": 0.0, "layout_hash": {}}}"#, layout_hash().wrapping_add(1));
        assert!(matches!(
            LinearModel::from_json(&stale),
            Err(ModelError::LayoutMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let result = LinearModel::from_json(r#"{"intercept": 0.0, "bias": 1.0}"#);
        assert!(matches!(result, Err(ModelError::Parse(_))));
    }
}
