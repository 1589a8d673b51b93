//! Student Insight Core
//!
//! Pure logic behind the prediction API:
//! - `record`: the interaction record submitted per request
//! - `features`: derived features and the model input layout
//! - `behavior`: rule-based behavioral classification
//! - `performance`: score banding, recommendations, feedback
//! - `model`: model loading and inference
//!
//! Nothing here performs I/O except `ModelHandle::load`.

pub mod behavior;
pub mod error;
pub mod features;
pub mod model;
pub mod performance;
pub mod record;

// Re-export common types
pub use behavior::{analyze, BehaviorAnalysis};
pub use error::ModelError;
pub use features::{derive_features, DerivedFeatures, FeatureVector, FEATURE_COUNT};
pub use model::{ModelHandle, ModelMetadata, Predictor};
pub use performance::PerformanceBand;
pub use record::InteractionRecord;
