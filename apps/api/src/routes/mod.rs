pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyses", post(handlers::handle_create_analysis))
        .route("/api/v1/analyses/:id", get(handlers::handle_get_analysis))
        .route(
            "/api/v1/resumes/:resume_id/analyses",
            get(handlers::handle_list_resume_analyses),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::analysis::store::InMemoryAnalysisStore;

    fn app() -> Router {
        build_router(AppState::with_store(Arc::new(InMemoryAnalysisStore::default())))
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn sample_payload() -> Value {
        json!({
            "resume_data": {
                "skills": ["Python", "FastAPI"],
                "experience": [{ "role": "Dev", "years": 3 }]
            },
            "job_data": {
                "required_skills": ["Python", "SQL", "Docker"],
                "min_experience": 2
            }
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let response = app()
            .oneshot(post_json("/api/v1/analyze", &sample_payload()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        let score = body["overall_score"].as_f64().unwrap();
        assert!((score - 0.5333).abs() < 0.001, "score was {score}");
        assert_eq!(body["matched_skills"], json!(["Python"]));
        assert_eq!(body["missing_skills"], json!(["SQL", "Docker"]));
        assert_eq!(body["experience_alignment"], "Matches");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
        assert!(body.get("signal").is_none());
    }

    #[tokio::test]
    async fn test_analyze_rejects_wrong_shape() {
        let response = app()
            .oneshot(post_json("/api/v1/analyze", &json!({ "invalid": "data" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json(response).await;
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_numeric_years() {
        let mut payload = sample_payload();
        payload["resume_data"]["experience"] = json!([{ "years": "three" }]);
        let response = app()
            .oneshot(post_json("/api/v1/analyze", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_analyze_rejects_negative_min_experience() {
        let mut payload = sample_payload();
        payload["job_data"]["min_experience"] = json!(-2);
        let response = app()
            .oneshot(post_json("/api/v1/analyze", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_then_fetch_analysis() {
        let app = app();
        let resume_id = Uuid::new_v4();
        let posting_id = Uuid::new_v4();

        let mut payload = sample_payload();
        payload["resume_id"] = json!(resume_id);
        payload["posting_id"] = json!(posting_id);

        let response = app
            .clone()
            .oneshot(post_json("/api/v1/analyses", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = read_json(response).await;
        assert_eq!(created["overall_score"], 53);
        assert_eq!(created["signal"], "yellow");
        assert_eq!(created["resume_id"], json!(resume_id));
        assert_eq!(created["posting_id"], json!(posting_id));
        assert_eq!(created["experience_alignment"], "Matches");

        let id = created["id"].as_str().unwrap().to_string();
        let response = app
            .clone()
            .oneshot(get(&format!("/api/v1/analyses/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, created);

        let response = app
            .oneshot(get(&format!("/api/v1/resumes/{resume_id}/analyses")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!([created]));
    }

    #[tokio::test]
    async fn test_create_requires_ids() {
        let response = app()
            .oneshot(post_json("/api/v1/analyses", &sample_payload()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_analysis_is_404() {
        let response = app()
            .oneshot(get(&format!("/api/v1/analyses/{}", Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = read_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
