//! Performance banding
//!
//! Maps a predicted correctness score onto six ordered bands, each with a
//! learning-material recommendation and a feedback message.

use serde::Serialize;

/// One performance band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceBand {
    pub number: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

/// (exclusive upper bound, band); the last band catches everything else
const BANDS: [(f64, PerformanceBand); 5] = [
    (0.3, PerformanceBand { number: 0, name: "Poor", description: "Needs immediate intervention and support", emoji: "🆘" }),
    (0.45, PerformanceBand { number: 1, name: "Weak", description: "Requires additional practice and guidance", emoji: "⚠️" }),
    (0.6, PerformanceBand { number: 2, name: "Below Average", description: "Shows potential but needs improvement", emoji: "📈" }),
    (0.75, PerformanceBand { number: 3, name: "Average", description: "Solid understanding with room to grow", emoji: "✅" }),
    (0.9, PerformanceBand { number: 4, name: "Strong", description: "Excellent performance and comprehension", emoji: "🌟" }),
];

const TOP_BAND: PerformanceBand = PerformanceBand {
    number: 5,
    name: "Outstanding",
    description: "Exceptional mastery of the material",
    emoji: "🏆",
};

/// Band for a correctness score
pub fn categorize(score: f64) -> PerformanceBand {
    BANDS
        .iter()
        .find(|(upper, _)| score < *upper)
        .map(|(_, band)| *band)
        .unwrap_or(TOP_BAND)
}

/// Learning material suited to a band
pub fn recommend_learning_material(band_number: u8) -> &'static str {
    match band_number {
        0 => "🔹 Basics tutorial video + guided beginner-level exercises.",
        1 => "🔸 Visual explanation content + step-by-step practice problems.",
        2 => "🔹 Practice exercises with hints enabled + instant feedback.",
        3 => "✅ Standard module content + end-of-lesson quiz.",
        4 => "🌟 Advanced challenge problems + peer group discussion tasks.",
        5 => "🏆 Project-based learning module + opportunity to mentor peers.",
        _ => "📘 Keep learning and practicing regularly.",
    }
}

/// Encouragement matched to a band
pub fn feedback_message(band_number: u8) -> &'static str {
    match band_number {
        0 => "It's okay to struggle — the key is to keep going. Let's review the basics together.",
        1 => "You're making progress. Focus on the foundation, and don't hesitate to seek help.",
        2 => "You've got potential. A little more consistent effort will go a long way!",
        3 => "Nice work! You're on track — just refine your skills step by step.",
        4 => "Great job! You've developed a solid understanding. Keep challenging yourself.",
        5 => "Outstanding! You've truly mastered the topic. Consider exploring advanced material or helping peers.",
        _ => "Keep pushing forward — every step counts!",
    }
}
