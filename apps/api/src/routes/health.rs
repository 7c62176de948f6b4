use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus the size and load time of the reference dataset.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let dataset = state.scorer.dataset();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "pathfinder-api",
        "dataset_rows": dataset.len(),
        "dataset_source": dataset.source().map(|p| p.display().to_string()),
        "dataset_loaded_at": dataset.loaded_at().to_rfc3339(),
    }))
}
