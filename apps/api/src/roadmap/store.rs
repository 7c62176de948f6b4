//! Roadmap template provider — pluggable, trait-based lookup of career roadmaps.
//!
//! `PgRoadmapStore` reads the `career_roadmaps` table; `InMemoryRoadmapStore`
//! serves templates loaded from a JSON file (local development, tests).
//!
//! `AppState` holds an `Arc<dyn RoadmapStore>`, chosen at startup via config.

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::info;

use crate::errors::AppError;
use crate::roadmap::models::{RoadmapSummary, RoadmapTemplate};

#[async_trait]
pub trait RoadmapStore: Send + Sync {
    /// Exact career-name match first, then case-insensitive. `Ok(None)` if absent.
    async fn find_by_career(&self, career: &str) -> Result<Option<RoadmapTemplate>, AppError>;

    /// All templates, sorted by career name.
    async fn list_careers(&self) -> Result<Vec<RoadmapSummary>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, FromRow)]
pub struct CareerRoadmapRow {
    pub career: String,
    pub slug: Option<String>,
    pub document: Value,
}

impl CareerRoadmapRow {
    fn into_template(self) -> Result<RoadmapTemplate, AppError> {
        let mut template: RoadmapTemplate = serde_json::from_value(self.document)
            .with_context(|| format!("Malformed roadmap document for '{}'", self.career))?;
        // the indexed columns are authoritative
        template.career = self.career;
        if self.slug.is_some() {
            template.slug = self.slug;
        }
        Ok(template)
    }
}

#[derive(Clone)]
pub struct PgRoadmapStore {
    pool: PgPool,
}

impl PgRoadmapStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoadmapStore for PgRoadmapStore {
    async fn find_by_career(&self, career: &str) -> Result<Option<RoadmapTemplate>, AppError> {
        let exact: Option<CareerRoadmapRow> = sqlx::query_as(
            "SELECT career, slug, document FROM career_roadmaps WHERE career = $1",
        )
        .bind(career)
        .fetch_optional(&self.pool)
        .await?;

        let row = match exact {
            Some(row) => Some(row),
            None => {
                sqlx::query_as::<_, CareerRoadmapRow>(
                    "SELECT career, slug, document FROM career_roadmaps \
                     WHERE lower(career) = lower($1) ORDER BY career LIMIT 1",
                )
                .bind(career)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        row.map(CareerRoadmapRow::into_template).transpose()
    }

    async fn list_careers(&self) -> Result<Vec<RoadmapSummary>, AppError> {
        let rows: Vec<(String, Option<String>)> =
            sqlx::query_as("SELECT career, slug FROM career_roadmaps ORDER BY career")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(career, slug)| RoadmapSummary { career, slug })
            .collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryRoadmapStore {
    templates: Vec<RoadmapTemplate>,
}

impl InMemoryRoadmapStore {
    pub fn new(templates: Vec<RoadmapTemplate>) -> Self {
        Self { templates }
    }

    /// Loads a JSON array of templates.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read roadmap templates '{}'", path.display()))?;
        let templates: Vec<RoadmapTemplate> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed roadmap templates in '{}'", path.display()))?;
        info!("Loaded {} roadmap templates from {}", templates.len(), path.display());
        Ok(Self::new(templates))
    }
}

#[async_trait]
impl RoadmapStore for InMemoryRoadmapStore {
    async fn find_by_career(&self, career: &str) -> Result<Option<RoadmapTemplate>, AppError> {
        let found = self
            .templates
            .iter()
            .find(|t| t.career == career)
            .or_else(|| {
                let wanted = career.to_lowercase();
                self.templates
                    .iter()
                    .find(|t| t.career.to_lowercase() == wanted)
            });
        Ok(found.cloned())
    }

    async fn list_careers(&self) -> Result<Vec<RoadmapSummary>, AppError> {
        let mut summaries: Vec<RoadmapSummary> = self
            .templates
            .iter()
            .map(|t| RoadmapSummary {
                career: t.career.clone(),
                slug: t.slug.clone(),
            })
            .collect();
        summaries.sort_by(|a, b| a.career.cmp(&b.career));
        Ok(summaries)
    }
}
