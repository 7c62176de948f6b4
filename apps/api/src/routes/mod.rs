pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career matching
        .route("/api/v1/recommendations", post(matching::handle_recommend))
        .route(
            "/api/v1/vocabulary/:attribute",
            get(matching::handle_vocabulary),
        )
        // Roadmaps
        .route("/api/v1/roadmap", post(roadmap::handle_personalized_roadmap))
        .route("/api/v1/roadmaps", get(roadmap::handle_list_roadmaps))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::matching::dataset::ReferenceDataset;
    use crate::matching::scorer::{AttributeWeights, CareerScorer};
    use crate::matching::vocabulary::Vocabulary;
    use crate::roadmap::store::InMemoryRoadmapStore;

    const DATASET: &str = "\
target_recommended_career,skills,interests
Data Scientist,\"[\"\"Python\"\",\"\"SQL\"\"]\",AI
Web Developer,\"[\"\"JavaScript\"\"]\",Design
";

    fn app(csv: &str) -> Router {
        let dataset = Arc::new(ReferenceDataset::from_reader(csv.as_bytes()).unwrap());
        let vocabulary = Arc::new(Vocabulary::from_dataset(&dataset));
        let template = serde_json::from_value(json!({
            "career": "Data Scientist",
            "core_skills": ["Python", "Statistics"],
            "phases": [{ "title": "Basics", "recommended_duration_months": 2,
                         "tasks": [{ "title": "Stats", "related_skills": ["Statistics"] }] }]
        }))
        .unwrap();

        build_router(AppState {
            scorer: Arc::new(CareerScorer::new(dataset, AttributeWeights::default())),
            vocabulary,
            roadmaps: Arc::new(InMemoryRoadmapStore::new(vec![template])),
            config: Config {
                dataset_path: "unused.csv".into(),
                database_url: None,
                roadmaps_path: "unused.json".into(),
                default_top_k: 3,
                port: 0,
                rust_log: "info".to_string(),
            },
        })
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_reports_dataset_size() {
        let (status, body) = send(app(DATASET), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dataset_rows"], 2);
        // built from a reader, so no file path to report
        assert!(body["dataset_source"].is_null());
        assert!(body["dataset_loaded_at"].is_string());
    }

    #[tokio::test]
    async fn test_recommendations_ranked() {
        let (status, body) = send(
            app(DATASET),
            "POST",
            "/api/v1/recommendations",
            Some(json!({ "profile": { "profile": { "skills": ["Python"] } } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["career"], "Data Scientist");
        assert_eq!(results[0]["score"], 1.0);
        assert_eq!(results[0]["top_skills"], json!(["Python"]));
    }

    #[tokio::test]
    async fn test_recommendations_reject_zero_top_k() {
        let (status, body) = send(
            app(DATASET),
            "POST",
            "/api/v1/recommendations",
            Some(json!({ "profile": {}, "top_k": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_empty_dataset_returns_empty_results() {
        let (status, body) = send(
            app("target_recommended_career,skills\n"),
            "POST",
            "/api/v1/recommendations",
            Some(json!({ "profile": { "skills": ["Python"] } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"], json!([]));
    }

    #[tokio::test]
    async fn test_roadmap_personalized() {
        let (status, body) = send(
            app(DATASET),
            "POST",
            "/api/v1/roadmap",
            Some(json!({ "career": "data scientist",
                         "profile": { "skills": ["Python"], "learning_pace": "slow" } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["career"], "Data Scientist");
        assert_eq!(body["skill_gaps"]["core_missing"], json!(["Statistics"]));
        assert_eq!(body["phases"][0]["personalized_duration_months"], 3.0);
        assert_eq!(body["phases"][0]["tasks"][0]["priority"], "high");
        assert_eq!(body["phases"][0]["tasks"][0]["status"], "focus");
    }

    #[tokio::test]
    async fn test_roadmap_errors() {
        let (status, _) = send(
            app(DATASET),
            "POST",
            "/api/v1/roadmap",
            Some(json!({ "career": "Chef", "profile": {} })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            app(DATASET),
            "POST",
            "/api/v1/roadmap",
            Some(json!({ "career": " ", "profile": {} })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            app(DATASET),
            "POST",
            "/api/v1/roadmap",
            Some(json!({ "career": "Data Scientist" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_roadmaps() {
        let (status, body) = send(app(DATASET), "GET", "/api/v1/roadmaps", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "career": "Data Scientist", "slug": null }]));
    }

    #[tokio::test]
    async fn test_vocabulary_lookup() {
        let (status, body) = send(app(DATASET), "GET", "/api/v1/vocabulary/skills?q=java", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["JavaScript"]));

        let (status, _) = send(app(DATASET), "GET", "/api/v1/vocabulary/salary", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
