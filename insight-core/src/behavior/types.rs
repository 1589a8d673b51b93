//! Behavior Types
//!
//! Labels produced by the classifier. No logic beyond naming.

use serde::{Deserialize, Serialize};

// ============================================================================
// AFFECT
// ============================================================================

/// Affect categories reported by the upstream detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affect {
    Frustrated,
    Confused,
    Concentrating,
    Bored,
}

impl Affect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Affect::Frustrated => "frustrated",
            Affect::Confused => "confused",
            Affect::Concentrating => "concentrating",
            Affect::Bored => "bored",
        }
    }

    /// One-line reading of the state for learners and teachers
    pub fn summary(&self) -> &'static str {
        match self {
            Affect::Frustrated => "frustration, a hint or a short break may help",
            Affect::Confused => "confusion, revisiting the underlying concept may help",
            Affect::Concentrating => "focused concentration on the task",
            Affect::Bored => "boredom, a harder or more varied task may re-engage",
        }
    }
}

impl std::fmt::Display for Affect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four affect-confidence scores of one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffectScores {
    pub frustrated: f64,
    pub confused: f64,
    pub concentrating: f64,
    pub bored: f64,
}

impl AffectScores {
    pub fn get(&self, affect: Affect) -> f64 {
        match affect {
            Affect::Frustrated => self.frustrated,
            Affect::Confused => self.confused,
            Affect::Concentrating => self.concentrating,
            Affect::Bored => self.bored,
        }
    }
}

/// How strongly the dominant affect shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffectIntensity {
    Strong,
    Present,
    Faint,
}

/// Dominant affect with its score and a readable description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectReading {
    pub label: Affect,
    pub score: f64,
    pub intensity: AffectIntensity,
    pub description: String,
}

// ============================================================================
// BEHAVIOR BANDS
// ============================================================================

/// Three-step band used by most behaviors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speed {
    Fast,
    Moderate,
    Slow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTone {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Active,
    Minimal,
    None,
}

/// Banded view of one record's behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorProfile {
    pub engagement: Level,
    pub hint_dependency: Level,
    pub efficiency: Level,
    pub response_speed: Speed,
    pub confidence_balance: ConfidenceTone,
    pub persistence: Level,
    pub overall_activity: Activity,
}

// ============================================================================
// LEARNER PROFILE
// ============================================================================

/// Learner archetype, serialized with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearnerProfile {
    #[serde(rename = "Fast but Careless 🐇")]
    FastButCareless,
    #[serde(rename = "Slow and Careful 🐢")]
    SlowAndCareful,
    #[serde(rename = "Confused Learner 🤔")]
    ConfusedLearner,
    #[serde(rename = "Focused Performer 🎯")]
    FocusedPerformer,
    #[serde(rename = "General Learner")]
    General,
}

impl LearnerProfile {
    pub fn label(&self) -> &'static str {
        match self {
            LearnerProfile::FastButCareless => "Fast but Careless 🐇",
            LearnerProfile::SlowAndCareful => "Slow and Careful 🐢",
            LearnerProfile::ConfusedLearner => "Confused Learner 🤔",
            LearnerProfile::FocusedPerformer => "Focused Performer 🎯",
            LearnerProfile::General => "General Learner",
        }
    }
}

impl std::fmt::Display for LearnerProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// FULL ANALYSIS
// ============================================================================

/// Everything the classifier says about one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorAnalysis {
    pub learner_profile: LearnerProfile,
    pub dominant_affect: AffectReading,
    pub behaviors: BehaviorProfile,
}
