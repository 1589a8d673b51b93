//! Feature deriver
//!
//! Arithmetic over the raw record. Deterministic and total: every
//! denominator is offset so it never reaches zero for non-negative input.

use serde::Serialize;

use crate::record::InteractionRecord;

/// Keeps `engagement_ratio` finite when the bored score is zero
pub const ENGAGEMENT_EPSILON: f64 = 1e-6;

/// Features computed from one interaction record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedFeatures {
    /// Attempts plus hints
    pub action_count: f64,
    /// Coarse activity bucket: 0 (none), 1 (single action), 2 (more)
    #[serde(skip_serializing)]
    pub action_level: u8,
    pub hint_dependency: f64,
    pub response_speed: f64,
    pub confidence_balance: f64,
    pub engagement_ratio: f64,
    pub efficiency_indicator: f64,
}

/// Derive all features for a record
pub fn derive_features(record: &InteractionRecord) -> DerivedFeatures {
    let action_count = record.attempt_count + record.hint_count;

    DerivedFeatures {
        action_count,
        action_level: action_level(action_count),
        hint_dependency: record.hint_count / (record.attempt_count + 1.0),
        response_speed: 1.0 / (record.ms_first_response + 1.0),
        confidence_balance: record.avg_conf_concentrating
            - record.avg_conf_frustrated
            - record.avg_conf_confused,
        engagement_ratio: record.avg_conf_concentrating / (record.avg_conf_bored + ENGAGEMENT_EPSILON),
        efficiency_indicator: action_count / (record.attempt_count + 1.0),
    }
}

fn action_level(action_count: f64) -> u8 {
    if action_count == 0.0 {
        0
    } else if action_count == 1.0 {
        1
    } else {
        2
    }
}
