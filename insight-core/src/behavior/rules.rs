//! Behavior Rules & Thresholds
//!
//! Constants only. The decision table that uses them lives in `classifier`.
//! Band comparisons are strict (`value > threshold`).

use super::types::Affect;

// ============================================================================
// AFFECT
// ============================================================================

/// Tie-break order for the dominant affect: earlier entries win equal scores
pub const AFFECT_PRIORITY: [Affect; 4] = [
    Affect::Frustrated,
    Affect::Confused,
    Affect::Bored,
    Affect::Concentrating,
];

/// Dominant score at or above this = strong
pub const AFFECT_STRONG_MIN: f64 = 0.6;

/// Dominant score at or above this = present, below = faint
pub const AFFECT_PRESENT_MIN: f64 = 0.3;

// ============================================================================
// BEHAVIOR BANDS (high, moderate)
// ============================================================================

/// concentrating / bored
pub const ENGAGEMENT_BANDS: (f64, f64) = (2.0, 1.0);

/// hints per attempt
pub const HINT_DEPENDENCY_BANDS: (f64, f64) = (0.7, 0.3);

/// actions per attempt
pub const EFFICIENCY_BANDS: (f64, f64) = (1.0, 0.5);

/// 1 / (ms_first_response + 1); fast means a first response under 19ms
pub const RESPONSE_SPEED_BANDS: (f64, f64) = (0.05, 0.01);

/// concentrating - frustrated - confused
pub const CONFIDENCE_BANDS: (f64, f64) = (0.2, -0.2);

/// raw attempt count
pub const PERSISTENCE_BANDS: (f64, f64) = (5.0, 2.0);

// ============================================================================
// LEARNER PROFILE
// ============================================================================

/// Half an hour, in seconds; splits quick sessions from long ones
pub const LONG_SESSION_SECS: f64 = 1800.0;

/// Fast but Careless: few attempts, low focus, visible frustration
pub const CARELESS_MAX_ATTEMPTS: f64 = 3.0;
pub const CARELESS_MAX_CONCENTRATING: f64 = 0.5;
pub const CARELESS_MIN_FRUSTRATED: f64 = 0.3;

/// Slow and Careful: few hints, high focus, efficient
pub const CAREFUL_MAX_HINTS: f64 = 5.0;
pub const CAREFUL_MIN_CONCENTRATING: f64 = 0.6;
pub const CAREFUL_MIN_EFFICIENCY: f64 = 0.6;

/// Confused Learner: heavy hint use, confusion, low confidence balance
pub const CONFUSED_MIN_HINTS: f64 = 6.0;
pub const CONFUSED_MIN_CONFUSED: f64 = 0.3;
pub const CONFUSED_MIN_BOTTOM_HINTS: f64 = 5.0;
pub const CONFUSED_MAX_BALANCE: f64 = 0.4;

/// Focused Performer: focused, confident, independent, efficient
pub const FOCUSED_MIN_CONCENTRATING: f64 = 0.6;
pub const FOCUSED_MIN_BALANCE: f64 = 0.6;
pub const FOCUSED_MAX_HINT_DEPENDENCY: f64 = 0.3;
pub const FOCUSED_MIN_EFFICIENCY: f64 = 0.6;
