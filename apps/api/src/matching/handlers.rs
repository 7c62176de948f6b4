//! Axum route handlers for career recommendations and master-list lookups.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::MAX_TOP_K;
use crate::errors::AppError;
use crate::matching::scorer::CareerRecommendation;
use crate::matching::vocabulary::Vocabulary;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Any profile shape; normalization never rejects it.
    #[serde(default)]
    pub profile: Value,
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub results: Vec<CareerRecommendation>,
}

#[derive(Debug, Deserialize)]
pub struct VocabularyQuery {
    pub q: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Ranks careers for the submitted profile. An empty reference dataset is not
/// an error: it returns an empty result list.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let top_k = request.top_k.unwrap_or(state.config.default_top_k);
    if top_k == 0 || top_k > MAX_TOP_K {
        return Err(AppError::Validation(format!(
            "top_k must be between 1 and {MAX_TOP_K}"
        )));
    }

    if state.scorer.dataset().is_empty() {
        warn!("Recommendation requested but the reference dataset is empty");
    }

    let results = state.scorer.recommend(&request.profile, top_k);
    debug!("Returning {} career recommendations", results.len());

    Ok(Json(RecommendResponse { results }))
}

/// GET /api/v1/vocabulary/:attribute?q=
///
/// Known names for skills, interests, strengths or weaknesses. With `q`, a
/// case-insensitive substring search.
pub async fn handle_vocabulary(
    State(state): State<AppState>,
    Path(attribute): Path<String>,
    Query(params): Query<VocabularyQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let attr = Vocabulary::attribute(&attribute)
        .ok_or_else(|| AppError::NotFound(format!("Unknown vocabulary '{attribute}'")))?;

    let names = match params.q.as_deref() {
        Some(q) => state.vocabulary.search(attr, q),
        None => state.vocabulary.all(attr),
    };
    Ok(Json(names))
}
