mod config;
mod db;
mod errors;
mod matching;
mod profile;
mod roadmap;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::matching::dataset::ReferenceDataset;
use crate::matching::scorer::{AttributeWeights, CareerScorer};
use crate::matching::vocabulary::Vocabulary;
use crate::roadmap::store::{InMemoryRoadmapStore, PgRoadmapStore, RoadmapStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathfinder API v{}", env!("CARGO_PKG_VERSION"));

    // Reference dataset: loaded once, immutable for the process lifetime
    let dataset = Arc::new(ReferenceDataset::load(&config.dataset_path)?);
    let vocabulary = Arc::new(Vocabulary::from_dataset(&dataset));
    let scorer = Arc::new(CareerScorer::new(dataset, AttributeWeights::default()));

    // Roadmap templates: PostgreSQL if configured, else the JSON file
    let roadmaps: Arc<dyn RoadmapStore> = match &config.database_url {
        Some(url) => Arc::new(PgRoadmapStore::new(create_pool(url).await?)),
        None => {
            info!("DATABASE_URL not set; serving roadmaps from {}", config.roadmaps_path.display());
            Arc::new(InMemoryRoadmapStore::from_json_file(&config.roadmaps_path)?)
        }
    };

    // Build app state
    let state = AppState {
        scorer,
        vocabulary,
        roadmaps,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
