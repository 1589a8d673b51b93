//! Response bodies

use insight_core::behavior::BehaviorAnalysis;
use insight_core::{DerivedFeatures, PerformanceBand};
use serde::Serialize;

/// Model output plus its performance band
#[derive(Debug, Serialize)]
pub struct PredictionSummary {
    pub correctness_score: f64,
    pub category_number: u8,
    pub performance_category: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

impl PredictionSummary {
    pub fn new(score: f64, band: PerformanceBand) -> Self {
        Self {
            correctness_score: score,
            category_number: band.number,
            performance_category: band.name,
            description: band.description,
            emoji: band.emoji,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Recommendations {
    pub learning_material: &'static str,
    pub feedback_message: &'static str,
}

/// POST /predict
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: PredictionSummary,
    #[serde(flatten)]
    pub analysis: BehaviorAnalysis,
    pub recommendations: Recommendations,
    pub raw_metrics: DerivedFeatures,
}

/// POST /analyze; carries no model output
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: BehaviorAnalysis,
    pub computed_metrics: DerivedFeatures,
}
