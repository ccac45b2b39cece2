//! Score Aggregator — combines the skill, experience and recommendation leaves
//! into one canonical `ScoreResult`.
//!
//! overall = skill_score × 0.7 + experience_weight × 0.3
//!
//! The stateless and persisted response shapes are both adapters over the same
//! `ScoreResult` (see `percentage()` and `Signal`), so the two never drift.

use serde::{Deserialize, Serialize};

use crate::fitgap::experience::{self, AlignmentTier, ExperienceEntry};
use crate::fitgap::{recommendations, skills};

pub const SKILL_WEIGHT: f64 = 0.7;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;

/// Traffic-light summary of a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Green,
    Yellow,
    Red,
}

impl Signal {
    /// `>= 80` green, `>= 40` yellow, otherwise red.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 80 {
            Signal::Green
        } else if percentage >= 40 {
            Signal::Yellow
        } else {
            Signal::Red
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Green => "green",
            Signal::Yellow => "yellow",
            Signal::Red => "red",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "green" => Some(Signal::Green),
            "yellow" => Some(Signal::Yellow),
            "red" => Some(Signal::Red),
            _ => None,
        }
    }
}

/// Output of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0.0 – 1.0
    pub overall_score: f64,
    pub skill_score: f64,
    pub experience_weight: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_alignment: AlignmentTier,
    pub recommendations: Vec<String>,
}

impl ScoreResult {
    /// Overall score as a rounded integer percentage (0 – 100).
    pub fn percentage(&self) -> u8 {
        (self.overall_score * 100.0).round().clamp(0.0, 100.0) as u8
    }

    pub fn signal(&self) -> Signal {
        Signal::from_percentage(self.percentage())
    }
}

/// Weight the experience tier contributes to the overall score.
pub fn experience_weight(tier: AlignmentTier) -> f64 {
    match tier {
        AlignmentTier::Exceeds | AlignmentTier::Matches => 1.0,
        AlignmentTier::Partial => 0.5,
        AlignmentTier::Below => 0.0,
    }
}

/// Fraction of required skills matched. An empty requirement list is fully satisfied.
pub fn skill_score(matched: usize, required: usize) -> f64 {
    if required == 0 {
        1.0
    } else {
        matched as f64 / required as f64
    }
}

/// Runs a full fit-gap pass over already-validated inputs.
pub fn score(
    candidate_skills: &[String],
    required_skills: &[String],
    experience_entries: &[ExperienceEntry],
    required_years: f64,
) -> ScoreResult {
    let comparison = skills::compare(candidate_skills, required_skills);
    let tier = experience::classify(experience_entries, required_years);
    let recommendations = recommendations::generate(&comparison.missing);

    let skill_score = skill_score(comparison.matched.len(), required_skills.len());
    let experience_weight = experience_weight(tier);
    let overall_score = skill_score * SKILL_WEIGHT + experience_weight * EXPERIENCE_WEIGHT;

    ScoreResult {
        overall_score,
        skill_score,
        experience_weight,
        matched_skills: comparison.matched,
        missing_skills: comparison.missing,
        experience_alignment: tier,
        recommendations,
    }
}
