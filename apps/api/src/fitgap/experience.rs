//! Experience Classifier — buckets total years of experience against a required minimum.

use serde::{Deserialize, Serialize};

/// How a candidate's total experience compares with the posting's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignmentTier {
    /// At least twice the required years.
    Exceeds,
    Matches,
    /// Within 80% of the requirement.
    Partial,
    Below,
}

impl AlignmentTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentTier::Exceeds => "Exceeds",
            AlignmentTier::Matches => "Matches",
            AlignmentTier::Partial => "Partial",
            AlignmentTier::Below => "Below",
        }
    }

    /// Parses the stored string form. Returns `None` for anything outside the four tiers.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Exceeds" => Some(AlignmentTier::Exceeds),
            "Matches" => Some(AlignmentTier::Matches),
            "Partial" => Some(AlignmentTier::Partial),
            "Below" => Some(AlignmentTier::Below),
            _ => None,
        }
    }
}

impl std::fmt::Display for AlignmentTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One résumé experience entry. Only `years` takes part in scoring; any other
/// fields the caller sends (role, company, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub years: Option<f64>,
}

impl ExperienceEntry {
    #[cfg(test)]
    pub fn new(years: f64) -> Self {
        Self { years: Some(years) }
    }

    /// Years this entry contributes: missing and negative values count as zero.
    pub fn effective_years(&self) -> f64 {
        self.years.unwrap_or(0.0).max(0.0)
    }
}

/// Sum of effective years across all entries.
pub fn total_years(entries: &[ExperienceEntry]) -> f64 {
    entries.iter().map(ExperienceEntry::effective_years).sum()
}

/// Classifies total experience against `required_years`. First match wins:
/// `>= 2x` Exceeds, `>= 1x` Matches, `>= 0.8x` Partial, otherwise Below.
pub fn classify(entries: &[ExperienceEntry], required_years: f64) -> AlignmentTier {
    let total = total_years(entries);

    if total >= required_years * 2.0 {
        AlignmentTier::Exceeds
    } else if total >= required_years {
        AlignmentTier::Matches
    } else if total >= required_years * 0.8 {
        AlignmentTier::Partial
    } else {
        AlignmentTier::Below
    }
}
