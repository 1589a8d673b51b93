//! Features Module - Feature Derivation
//!
//! Turns a raw interaction record into derived features and the
//! fixed-order vector the model consumes.

pub mod deriver;
pub mod layout;
pub mod vector;


// Re-export common types
pub use deriver::{derive_features, DerivedFeatures};
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use vector::FeatureVector;
