use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::CareerScorer;
use crate::matching::vocabulary::Vocabulary;
use crate::roadmap::store::RoadmapStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup; requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// Owns the immutable reference dataset snapshot.
    pub scorer: Arc<CareerScorer>,
    pub vocabulary: Arc<Vocabulary>,
    /// Pluggable template provider. PostgreSQL when DATABASE_URL is set, else a JSON file.
    pub roadmaps: Arc<dyn RoadmapStore>,
    pub config: Config,
}
