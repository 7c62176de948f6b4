//! Reference dataset — the labelled profile corpus careers are matched against.
//!
//! Loaded once at startup from CSV and shared read-only as `Arc<ReferenceDataset>`.
//! Row order is preserved exactly: it is the tie-break order for career aggregation.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::profile::models::{ListAttribute, NormalizedProfile, ScalarAttribute};

/// Column holding the career label of each row.
pub const CAREER_COLUMN: &str = "target_recommended_career";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Unable to open dataset '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// One labelled historical profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRow {
    pub career: String,
    pub attributes: NormalizedProfile,
}

#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    rows: Vec<ReferenceRow>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
}

impl ReferenceDataset {
    pub fn new(rows: Vec<ReferenceRow>) -> Self {
        Self {
            rows,
            source: None,
            loaded_at: Utc::now(),
        }
    }

    /// Reads the dataset CSV at `path`.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        info!("Loading reference dataset from {}", path.display());
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut dataset = Self::from_reader(file)?;
        dataset.source = Some(path.to_path_buf());
        Ok(dataset)
    }

    /// Parses CSV with a header row. Unknown columns are ignored and missing
    /// attribute columns read as empty cells; only the career column is required.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let column = |name: &str| headers.iter().position(|h| h == name);

        let career_idx = column(CAREER_COLUMN).ok_or(DatasetError::MissingColumn(CAREER_COLUMN))?;
        let list_cols: Vec<(ListAttribute, Option<usize>)> = ListAttribute::ALL
            .into_iter()
            .map(|a| (a, column(a.key())))
            .collect();
        let scalar_cols: Vec<(ScalarAttribute, Option<usize>)> = ScalarAttribute::ALL
            .into_iter()
            .map(|a| (a, column(a.key())))
            .collect();

        for (attr, idx) in &list_cols {
            if idx.is_none() {
                warn!("Dataset has no '{}' column; treating as empty", attr.key());
            }
        }

        let mut rows = Vec::new();
        let mut skipped = 0usize;

        for record in reader.records() {
            let record = record?;
            let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

            let career = cell(Some(career_idx)).trim();
            if career.is_empty() {
                skipped += 1;
                continue;
            }

            let mut attributes = NormalizedProfile::default();
            for (attr, idx) in &list_cols {
                *attributes.list_mut(*attr) = parse_list_cell(cell(*idx));
            }
            for (attr, idx) in &scalar_cols {
                *attributes.scalar_mut(*attr) = parse_scalar_cell(cell(*idx));
            }

            rows.push(ReferenceRow {
                career: career.to_string(),
                attributes,
            });
        }

        if skipped > 0 {
            warn!("Skipped {skipped} dataset rows with a blank career label");
        }
        info!("Loaded {} reference profiles", rows.len());

        Ok(Self::new(rows))
    }

    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Permissive list-cell parser: a JSON array is preferred, anything else is
/// split on commas. Blank cells and blank items yield nothing.
pub fn parse_list_cell(cell: &str) -> Vec<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    // well-formed JSON that is not an array carries no list
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return match value {
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(crate::profile::normalizer::element_text)
                .collect(),
            _ => Vec::new(),
        };
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_scalar_cell(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
