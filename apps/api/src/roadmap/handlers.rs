//! Axum route handlers for the Roadmap API.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::roadmap::models::{PersonalizedRoadmap, RoadmapSummary};
use crate::roadmap::personalizer::personalize_roadmap;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub career: String,
    #[serde(default)]
    pub profile: Value,
}

/// POST /api/v1/roadmap
///
/// Looks up the career's template (exact, then case-insensitive) and
/// personalizes it for the submitted profile.
pub async fn handle_personalized_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<PersonalizedRoadmap>, AppError> {
    let career = request.career.trim();
    if career.is_empty() {
        return Err(AppError::Validation("career is required".to_string()));
    }
    if request.profile.is_null() {
        return Err(AppError::Validation("profile is required".to_string()));
    }

    let template = state
        .roadmaps
        .find_by_career(career)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No roadmap found for career '{career}'")))?;

    let roadmap = personalize_roadmap(&template, &request.profile);
    debug!(
        "Personalized roadmap for {}: {} core gaps, {} phases",
        roadmap.career,
        roadmap.skill_gaps.core_missing.len(),
        roadmap.phases.len()
    );

    Ok(Json(roadmap))
}

/// GET /api/v1/roadmaps
pub async fn handle_list_roadmaps(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoadmapSummary>>, AppError> {
    Ok(Json(state.roadmaps.list_careers().await?))
}
