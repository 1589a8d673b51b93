//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the model input schema.**
//!
//! Adding, removing or reordering a feature MUST increment `FEATURE_VERSION`.
//! Model artifacts record the layout hash they were exported against.

use crc32fast::Hasher;
use crate::error::ModelError;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in the exact order they appear in the model input
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Raw telemetry (0-8) ===
    "hint_count",             // 0
    "bottom_hint",            // 1
    "attempt_count",          // 2
    "ms_first_response",      // 3
    "duration",               // 4
    "avg_conf_frustrated",    // 5
    "avg_conf_confused",      // 6
    "avg_conf_concentrating", // 7
    "avg_conf_bored",         // 8

    // === Derived (9-14) ===
    "action_count",           // 9: attempts + hints
    "hint_dependency",        // 10: hints per attempt
    "response_speed",         // 11: inverse first-response latency
    "confidence_balance",     // 12: concentrating - frustrated - confused
    "engagement_ratio",       // 13: concentrating / bored
    "efficiency_indicator",   // 14: actions per attempt
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 15;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 of the version byte plus every feature name, NUL-separated
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

/// Reject a model exported against a different layout
pub fn check_layout_hash(model_hash: u32) -> Result<(), ModelError> {
    let actual = layout_hash();
    if model_hash != actual {
        return Err(ModelError::LayoutMismatch {
            expected: model_hash,
            actual,
        });
    }
    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_check_layout_hash() {
        assert!(check_layout_hash(layout_hash()).is_ok());
        assert!(matches!(
            check_layout_hash(layout_hash().wrapping_add(1)),
            Err(ModelError::LayoutMismatch { .. })
        ));
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("hint_count"), Some(0));
        assert_eq!(feature_index("avg_conf_bored"), Some(8));
        assert_eq!(feature_index("efficiency_indicator"), Some(14));
        assert_eq!(feature_index("action_level"), None);
    }
}
