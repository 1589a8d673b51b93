//! Behavioral Classifier
//!
//! Only classification logic lives here; labels are in `types`, numbers in
//! `rules`. Every function is total: any input, including negative,
//! out-of-range or NaN values, yields exactly one label.

use super::rules::*;
use super::types::{
    Activity, Affect, AffectIntensity, AffectReading, AffectScores, BehaviorAnalysis,
    BehaviorProfile, ConfidenceTone, LearnerProfile, Level, Speed,
};
use crate::features::DerivedFeatures;
use crate::record::InteractionRecord;

// ============================================================================
// MAIN ANALYSIS
// ============================================================================

/// Full behavioral analysis of one record
pub fn analyze(record: &InteractionRecord, derived: &DerivedFeatures) -> BehaviorAnalysis {
    BehaviorAnalysis {
        learner_profile: learner_profile(record, derived),
        dominant_affect: dominant_affect(&record.affect_scores()),
        behaviors: classify_behaviors(record, derived),
    }
}

// ============================================================================
// DOMINANT AFFECT
// ============================================================================

/// Pick the highest affect score; ties go to the earlier entry of `AFFECT_PRIORITY`
pub fn dominant_affect(scores: &AffectScores) -> AffectReading {
    let mut winner = AFFECT_PRIORITY[0];
    let mut best = rank(scores.get(winner));

    for &affect in &AFFECT_PRIORITY[1..] {
        let score = rank(scores.get(affect));
        if score > best {
            winner = affect;
            best = score;
        }
    }

    let score = scores.get(winner);
    let intensity = intensity(score);
    let runner_up = AFFECT_PRIORITY
        .iter()
        .copied()
        .filter(|&a| a != winner)
        .max_by(|&a, &b| rank(scores.get(a)).total_cmp(&rank(scores.get(b))));

    AffectReading {
        label: winner,
        score,
        intensity,
        description: describe(winner, score, intensity, runner_up.map(|a| (a, scores.get(a)))),
    }
}

/// NaN ranks below every real score
fn rank(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

fn intensity(score: f64) -> AffectIntensity {
    if score >= AFFECT_STRONG_MIN {
        AffectIntensity::Strong
    } else if score >= AFFECT_PRESENT_MIN {
        AffectIntensity::Present
    } else {
        AffectIntensity::Faint
    }
}

fn describe(
    winner: Affect,
    score: f64,
    intensity: AffectIntensity,
    runner_up: Option<(Affect, f64)>,
) -> String {
    let lead = match intensity {
        AffectIntensity::Strong => "Strong signs of",
        AffectIntensity::Present => "Signs of",
        AffectIntensity::Faint => "Faint signs of",
    };
    let mut text = format!("{} {} ({:.2})", lead, winner.summary(), score);

    if let Some((other, other_score)) = runner_up {
        if other_score == score {
            text.push_str(&format!("; tied with {}, {} takes priority", other, winner));
        }
    }

    text
}

// ============================================================================
// BEHAVIOR BANDS
// ============================================================================

/// Band every behavior of a record
pub fn classify_behaviors(record: &InteractionRecord, derived: &DerivedFeatures) -> BehaviorProfile {
    BehaviorProfile {
        engagement: level(derived.engagement_ratio, ENGAGEMENT_BANDS),
        hint_dependency: level(derived.hint_dependency, HINT_DEPENDENCY_BANDS),
        efficiency: level(derived.efficiency_indicator, EFFICIENCY_BANDS),
        response_speed: speed(derived.response_speed),
        confidence_balance: confidence(derived.confidence_balance),
        persistence: level(record.attempt_count, PERSISTENCE_BANDS),
        overall_activity: activity(derived.action_level),
    }
}

fn level(value: f64, (high, moderate): (f64, f64)) -> Level {
    if value > high {
        Level::High
    } else if value > moderate {
        Level::Moderate
    } else {
        Level::Low
    }
}

fn speed(value: f64) -> Speed {
    let (fast, moderate) = RESPONSE_SPEED_BANDS;
    if value > fast {
        Speed::Fast
    } else if value > moderate {
        Speed::Moderate
    } else {
        Speed::Slow
    }
}

fn confidence(value: f64) -> ConfidenceTone {
    let (positive, neutral) = CONFIDENCE_BANDS;
    if value > positive {
        ConfidenceTone::Positive
    } else if value > neutral {
        ConfidenceTone::Neutral
    } else {
        ConfidenceTone::Negative
    }
}

fn activity(action_level: u8) -> Activity {
    match action_level {
        0 => Activity::None,
        1 => Activity::Minimal,
        _ => Activity::Active,
    }
}

// ============================================================================
// LEARNER PROFILE
// ============================================================================

/// One row of the profile decision table
struct ProfileRule {
    profile: LearnerProfile,
    matches: fn(&InteractionRecord, &DerivedFeatures) -> bool,
}

/// Evaluated top to bottom; the first match wins
const PROFILE_RULES: &[ProfileRule] = &[
    ProfileRule {
        profile: LearnerProfile::FastButCareless,
        matches: |r, _| {
            r.duration < LONG_SESSION_SECS
                && r.attempt_count < CARELESS_MAX_ATTEMPTS
                && r.avg_conf_concentrating < CARELESS_MAX_CONCENTRATING
                && r.avg_conf_frustrated > CARELESS_MIN_FRUSTRATED
        },
    },
    ProfileRule {
        profile: LearnerProfile::SlowAndCareful,
        matches: |r, d| {
            r.duration > LONG_SESSION_SECS
                && r.hint_count < CAREFUL_MAX_HINTS
                && r.avg_conf_concentrating > CAREFUL_MIN_CONCENTRATING
                && d.efficiency_indicator > CAREFUL_MIN_EFFICIENCY
        },
    },
    ProfileRule {
        profile: LearnerProfile::ConfusedLearner,
        matches: |r, d| {
            r.hint_count > CONFUSED_MIN_HINTS
                && r.avg_conf_confused > CONFUSED_MIN_CONFUSED
                && r.bottom_hint > CONFUSED_MIN_BOTTOM_HINTS
                && d.confidence_balance < CONFUSED_MAX_BALANCE
        },
    },
    ProfileRule {
        profile: LearnerProfile::FocusedPerformer,
        matches: |r, d| {
            r.avg_conf_concentrating > FOCUSED_MIN_CONCENTRATING
                && d.confidence_balance > FOCUSED_MIN_BALANCE
                && d.hint_dependency < FOCUSED_MAX_HINT_DEPENDENCY
                && d.efficiency_indicator > FOCUSED_MIN_EFFICIENCY
        },
    },
];

/// Match the record against the profile table, falling back to General
pub fn learner_profile(record: &InteractionRecord, derived: &DerivedFeatures) -> LearnerProfile {
    PROFILE_RULES
        .iter()
        .find(|rule| (rule.matches)(record, derived))
        .map(|rule| rule.profile)
        .unwrap_or(LearnerProfile::General)
}

// ============================================================================
// TESTS
// ============================================================================
