//! Interaction payload accepted by /predict and /analyze

use insight_core::InteractionRecord;
use serde::Deserialize;
use validator::Validate;

/// Request body; field names are the wire contract
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InteractionInput {
    /// Total hints used by the student during the quiz so far
    #[validate(range(min = 0.0))]
    pub hint_count: f64,
    /// Bottom-out hints used during the quiz
    #[validate(range(min = 0.0))]
    pub bottom_hint: f64,
    /// Total attempts from the start until now
    #[validate(range(min = 0.0))]
    pub attempt_count: f64,
    /// Time to first attempt the question (ms)
    #[validate(range(min = 0.0))]
    pub ms_first_response: f64,
    /// Total time spent on the quiz (s)
    #[validate(range(min = 0.0))]
    pub duration: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub avg_conf_frustrated: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub avg_conf_confused: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub avg_conf_concentrating: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub avg_conf_bored: f64,
}

impl From<InteractionInput> for InteractionRecord {
    fn from(input: InteractionInput) -> Self {
        InteractionRecord {
            hint_count: input.hint_count,
            bottom_hint: input.bottom_hint,
            attempt_count: input.attempt_count,
            ms_first_response: input.ms_first_response,
            duration: input.duration,
            avg_conf_frustrated: input.avg_conf_frustrated,
            avg_conf_confused: input.avg_conf_confused,
            avg_conf_concentrating: input.avg_conf_concentrating,
            avg_conf_bored: input.avg_conf_bored,
        }
    }
}
