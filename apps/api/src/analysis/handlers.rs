//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::{
    AnalysisInput, AnalysisRecord, AnalyzeResponse, CreateAnalysisRequest, NewAnalysis,
};
use crate::state::AppState;

/// Unwraps a JSON body, turning shape errors (wrong types, missing fields) into a 422.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::UnprocessableEntity(rejection.body_text()))
}

/// POST /api/v1/analyze
///
/// Scores a résumé against a posting without persisting anything.
pub async fn handle_analyze(
    payload: Result<Json<AnalysisInput>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let input = json_body(payload)?;
    let result = input.score()?;

    debug!(
        overall_score = result.overall_score,
        matched = result.matched_skills.len(),
        missing = result.missing_skills.len(),
        alignment = %result.experience_alignment,
        "Stateless analysis complete"
    );

    Ok(Json(AnalyzeResponse::from(result)))
}

/// POST /api/v1/analyses
///
/// Scores and stores an analysis keyed by résumé and posting ids.
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    payload: Result<Json<CreateAnalysisRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AnalysisRecord>), AppError> {
    let request = json_body(payload)?;
    let result = request.input().score()?;

    let new = NewAnalysis::from_score(request.resume_id, request.posting_id, &result);
    let record = state.analyses.insert(new).await?;

    info!(
        analysis_id = %record.id,
        resume_id = %record.resume_id,
        posting_id = %record.posting_id,
        overall_score = record.overall_score,
        signal = record.signal.as_str(),
        "Analysis stored"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRecord>, AppError> {
    state
        .analyses
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}

/// GET /api/v1/resumes/:resume_id/analyses
pub async fn handle_list_resume_analyses(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<Vec<AnalysisRecord>>, AppError> {
    let records = state.analyses.list_for_resume(resume_id).await?;
    Ok(Json(records))
}
