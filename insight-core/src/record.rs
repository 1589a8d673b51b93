//! Interaction Record
//!
//! One student's quiz-session telemetry. Immutable, lives for one request.

use serde::{Deserialize, Serialize};

/// Quiz-interaction telemetry for a single student.
///
/// Counts are held as `f64` because clients send them as plain JSON numbers.
/// Range checks belong to the HTTP boundary; everything in this crate is
/// total over any value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// Total hints used so far
    pub hint_count: f64,
    /// Bottom-out hints used
    pub bottom_hint: f64,
    /// Total attempts so far
    pub attempt_count: f64,
    /// Time to first response (milliseconds)
    pub ms_first_response: f64,
    /// Total time spent on the quiz (seconds)
    pub duration: f64,
    pub avg_conf_frustrated: f64,
    pub avg_conf_confused: f64,
    pub avg_conf_concentrating: f64,
    pub avg_conf_bored: f64,
}

impl InteractionRecord {
    /// Affect-confidence scores as a group
    pub fn affect_scores(&self) -> crate::behavior::AffectScores {
        crate::behavior::AffectScores {
            frustrated: self.avg_conf_frustrated,
            confused: self.avg_conf_confused,
            concentrating: self.avg_conf_concentrating,
            bored: self.avg_conf_bored,
        }
    }
}
