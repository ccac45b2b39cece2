use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::store::{AnalysisStore, PgAnalysisStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analysis store. Postgres in production, in-memory in tests.
    pub analyses: Arc<dyn AnalysisStore>,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self::with_store(Arc::new(PgAnalysisStore::new(db)))
    }

    pub fn with_store(analyses: Arc<dyn AnalysisStore>) -> Self {
        Self { analyses }
    }
}
