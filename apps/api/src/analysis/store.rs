//! Analysis persistence — trait-based so handlers never touch a concrete backend.
//!
//! Production: `PgAnalysisStore` over the shared `PgPool`.
//! Tests: `InMemoryAnalysisStore`, injected through `AppState::with_store`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::{AnalysisRecord, AnalysisRow, NewAnalysis};

/// Carried in `AppState` as `Arc<dyn AnalysisStore>`.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn insert(&self, analysis: NewAnalysis) -> Result<AnalysisRecord, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, AppError>;

    /// All analyses for a résumé, newest first.
    async fn list_for_resume(&self, resume_id: Uuid) -> Result<Vec<AnalysisRecord>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_record(row: AnalysisRow) -> Result<AnalysisRecord, AppError> {
    AnalysisRecord::try_from(row).map_err(AppError::Internal)
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn insert(&self, analysis: NewAnalysis) -> Result<AnalysisRecord, AppError> {
        let row = sqlx::query_as::<_, AnalysisRow>(
            r#"
            INSERT INTO analyses
                (id, resume_id, posting_id, overall_score, signal,
                 matched_skills, missing_skills, recommendations, experience_alignment)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(analysis.resume_id)
        .bind(analysis.posting_id)
        .bind(i16::from(analysis.overall_score))
        .bind(analysis.signal.as_str())
        .bind(&analysis.matched_skills)
        .bind(&analysis.missing_skills)
        .bind(&analysis.recommendations)
        .bind(analysis.experience_alignment.as_str())
        .fetch_one(&self.pool)
        .await?;

        into_record(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, AppError> {
        sqlx::query_as::<_, AnalysisRow>("SELECT * FROM analyses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(into_record)
            .transpose()
    }

    async fn list_for_resume(&self, resume_id: Uuid) -> Result<Vec<AnalysisRecord>, AppError> {
        sqlx::query_as::<_, AnalysisRow>(
            "SELECT * FROM analyses WHERE resume_id = $1 ORDER BY created_at DESC, id",
        )
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(into_record)
        .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory (tests)
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub use memory::InMemoryAnalysisStore;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitgap::{score, ExperienceEntry, Signal};

    fn new_analysis(resume_id: Uuid) -> NewAnalysis {
        let result = score(
            &["Rust".to_string()],
            &["Rust".to_string()],
            &[ExperienceEntry::new(4.0)],
            2.0,
        );
        NewAnalysis::from_score(resume_id, Uuid::new_v4(), &result)
    }

    #[tokio::test]
    async fn test_in_memory_insert_then_get() {
        let store = InMemoryAnalysisStore::default();
        let inserted = store.insert(new_analysis(Uuid::new_v4())).await.unwrap();
        assert_eq!(inserted.overall_score, 100);
        assert_eq!(inserted.signal, Signal::Green);

        let fetched = store.get(inserted.id).await.unwrap();
        assert_eq!(fetched, Some(inserted));
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_list_newest_first() {
        let store = InMemoryAnalysisStore::default();
        let resume_id = Uuid::new_v4();
        let first = store.insert(new_analysis(resume_id)).await.unwrap();
        store.insert(new_analysis(Uuid::new_v4())).await.unwrap();
        let second = store.insert(new_analysis(resume_id)).await.unwrap();

        let listed = store.list_for_resume(resume_id).await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }
}
