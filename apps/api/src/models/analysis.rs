use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::fitgap::{AlignmentTier, ExperienceEntry, ScoreResult, Signal};

// ────────────────────────────────────────────────────────────────────────────
// Request records
// ────────────────────────────────────────────────────────────────────────────

/// Résumé fields the scoring engine consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

/// Job-posting fields the scoring engine consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobData {
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Minimum total years of experience.
    #[serde(default)]
    pub min_experience: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub resume_data: ResumeData,
    pub job_data: JobData,
}

impl AnalysisInput {
    /// Rejects values serde accepts but scoring cannot use meaningfully.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_skill_names("resume_data.skills", &self.resume_data.skills)?;
        validate_skill_names("job_data.required_skills", &self.job_data.required_skills)?;

        for (i, entry) in self.resume_data.experience.iter().enumerate() {
            if let Some(years) = entry.years {
                if !years.is_finite() {
                    return Err(AppError::Validation(format!(
                        "resume_data.experience[{i}].years must be a finite number"
                    )));
                }
            }
        }

        let min = self.job_data.min_experience;
        if !min.is_finite() || min < 0.0 {
            return Err(AppError::Validation(
                "job_data.min_experience must be a non-negative number".to_string(),
            ));
        }

        Ok(())
    }

    /// Validates and scores in one step.
    pub fn score(&self) -> Result<ScoreResult, AppError> {
        self.validate()?;
        Ok(crate::fitgap::score(
            &self.resume_data.skills,
            &self.job_data.required_skills,
            &self.resume_data.experience,
            self.job_data.min_experience,
        ))
    }
}

fn validate_skill_names(field: &str, skills: &[String]) -> Result<(), AppError> {
    match skills.iter().position(|s| s.trim().is_empty()) {
        Some(i) => Err(AppError::Validation(format!(
            "{field}[{i}] must be a non-empty skill name"
        ))),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnalysisRequest {
    pub resume_id: Uuid,
    pub posting_id: Uuid,
    pub resume_data: ResumeData,
    pub job_data: JobData,
}

impl CreateAnalysisRequest {
    pub fn input(&self) -> AnalysisInput {
        AnalysisInput {
            resume_data: self.resume_data.clone(),
            job_data: self.job_data.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response shapes
// ────────────────────────────────────────────────────────────────────────────

/// Stateless analysis body: raw 0–1 score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub overall_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub experience_alignment: AlignmentTier,
}

impl From<ScoreResult> for AnalyzeResponse {
    fn from(result: ScoreResult) -> Self {
        Self {
            overall_score: result.overall_score,
            matched_skills: result.matched_skills,
            missing_skills: result.missing_skills,
            recommendations: result.recommendations,
            experience_alignment: result.experience_alignment,
        }
    }
}

/// Persisted analysis before the store assigns an id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysis {
    pub resume_id: Uuid,
    pub posting_id: Uuid,
    /// 0 – 100
    pub overall_score: u8,
    pub signal: Signal,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub experience_alignment: AlignmentTier,
}

impl NewAnalysis {
    pub fn from_score(resume_id: Uuid, posting_id: Uuid, result: &ScoreResult) -> Self {
        Self {
            resume_id,
            posting_id,
            overall_score: result.percentage(),
            signal: result.signal(),
            matched_skills: result.matched_skills.clone(),
            missing_skills: result.missing_skills.clone(),
            recommendations: result.recommendations.clone(),
            experience_alignment: result.experience_alignment,
        }
    }
}

/// Stored analysis as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub posting_id: Uuid,
    pub overall_score: u8,
    pub signal: Signal,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub experience_alignment: AlignmentTier,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    #[cfg(test)]
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, new: NewAnalysis) -> Self {
        Self {
            id,
            resume_id: new.resume_id,
            posting_id: new.posting_id,
            overall_score: new.overall_score,
            signal: new.signal,
            matched_skills: new.matched_skills,
            missing_skills: new.missing_skills,
            recommendations: new.recommendations,
            experience_alignment: new.experience_alignment,
            created_at,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DB row
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub posting_id: Uuid,
    pub overall_score: i16,
    pub signal: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub experience_alignment: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AnalysisRow> for AnalysisRecord {
    type Error = anyhow::Error;

    fn try_from(row: AnalysisRow) -> Result<Self, Self::Error> {
        let signal = Signal::parse(&row.signal)
            .ok_or_else(|| anyhow::anyhow!("unknown signal '{}' on analysis {}", row.signal, row.id))?;
        let experience_alignment = AlignmentTier::parse(&row.experience_alignment).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown alignment tier '{}' on analysis {}",
                row.experience_alignment,
                row.id
            )
        })?;
        let overall_score = u8::try_from(row.overall_score)
            .ok()
            .filter(|s| *s <= 100)
            .ok_or_else(|| {
                anyhow::anyhow!("overall_score {} out of range on analysis {}", row.overall_score, row.id)
            })?;

        Ok(AnalysisRecord {
            id: row.id,
            resume_id: row.resume_id,
            posting_id: row.posting_id,
            overall_score,
            signal,
            matched_skills: row.matched_skills,
            missing_skills: row.missing_skills,
            recommendations: row.recommendations,
            experience_alignment,
            created_at: row.created_at,
        })
    }
}
