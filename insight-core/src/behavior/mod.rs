//! Behavior Module - Rule-based behavioral classification
//!
//! - `types`: labels and output structures (no logic)
//! - `rules`: thresholds and priority orders (no logic)
//! - `classifier`: the decision table itself

pub mod classifier;
pub mod rules;
pub mod types;

// Re-export common types
pub use classifier::{analyze, classify_behaviors, dominant_affect, learner_profile};
pub use types::{
    Activity, Affect, AffectIntensity, AffectReading, AffectScores, BehaviorAnalysis,
    BehaviorProfile, ConfidenceTone, LearnerProfile, Level, Speed,
};
