//! Feature Vector - model input
//!
//! Values follow `FEATURE_LAYOUT` exactly. Built only from a record and its
//! derived features so the order cannot drift.

use serde::{Deserialize, Serialize};

use super::deriver::DerivedFeatures;
use super::layout::{feature_index, layout_hash, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
use crate::record::InteractionRecord;

/// Versioned feature vector handed to a `Predictor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Assemble the model input from a record and its derived features
    pub fn from_parts(record: &InteractionRecord, derived: &DerivedFeatures) -> Self {
        let values = [
            record.hint_count,
            record.bottom_hint,
            record.attempt_count,
            record.ms_first_response,
            record.duration,
            record.avg_conf_frustrated,
            record.avg_conf_confused,
            record.avg_conf_concentrating,
            record.avg_conf_bored,
            derived.action_count,
            derived.hint_dependency,
            derived.response_speed,
            derived.confidence_balance,
            derived.engagement_ratio,
            derived.efficiency_indicator,
        ];

        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).map(|i| self.values[i])
    }

    /// Values narrowed to `f32` for tensor input
    pub fn to_f32(&self) -> [f32; FEATURE_COUNT] {
        self.values.map(|v| v as f32)
    }

    /// (name, value) pairs in layout order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_LAYOUT.iter().copied().zip(self.values.iter().copied())
    }
}
