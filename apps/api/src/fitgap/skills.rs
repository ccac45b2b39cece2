//! Skill Comparator — case-insensitive partition of required skills into matched / missing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result of comparing a candidate's skills against a posting's requirements.
///
/// Both lists follow the order of the required skills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillComparison {
    /// Candidate-cased names of required skills the candidate has.
    pub matched: Vec<String>,
    /// Required-cased names of skills the candidate lacks.
    pub missing: Vec<String>,
}

/// Compares candidate skills against required skills, ignoring case.
///
/// A matched skill is reported with the candidate's spelling. When the
/// candidate lists the same skill twice with different casing, the later
/// spelling wins.
pub fn compare(candidate_skills: &[String], required_skills: &[String]) -> SkillComparison {
    let lookup: HashMap<String, &str> = candidate_skills
        .iter()
        .map(|s| (s.to_lowercase(), s.as_str()))
        .collect();

    let mut comparison = SkillComparison::default();

    for required in required_skills {
        match lookup.get(&required.to_lowercase()) {
            Some(candidate) => comparison.matched.push((*candidate).to_string()),
            None => comparison.missing.push(required.clone()),
        }
    }

    comparison
}
