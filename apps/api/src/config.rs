use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Invalid values fail startup with a descriptive error.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    /// When set, roadmap templates come from PostgreSQL; otherwise from `roadmaps_path`.
    pub database_url: Option<String>,
    pub roadmaps_path: PathBuf,
    pub default_top_k: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Largest `top_k` a request may ask for.
pub const MAX_TOP_K: usize = 50;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default_top_k = lookup("DEFAULT_TOP_K")
            .unwrap_or_else(|| "3".to_string())
            .parse::<usize>()
            .context("DEFAULT_TOP_K must be a positive integer")?;
        if default_top_k == 0 || default_top_k > MAX_TOP_K {
            bail!("DEFAULT_TOP_K must be between 1 and {MAX_TOP_K}");
        }

        Ok(Config {
            dataset_path: lookup("DATASET_PATH")
                .unwrap_or_else(|| "ml_data/final_dataset.csv".to_string())
                .into(),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            roadmaps_path: lookup("ROADMAPS_PATH")
                .unwrap_or_else(|| "ml_data/career_roadmaps.json".to_string())
                .into(),
            default_top_k,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.dataset_path, PathBuf::from("ml_data/final_dataset.csv"));
        assert_eq!(cfg.default_top_k, 3);
        assert_eq!(cfg.port, 8080);
        assert!(cfg.database_url.is_none());
    }

    #[test]
    fn test_blank_database_url_is_unset() {
        let cfg = config(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(cfg.database_url.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("DEFAULT_TOP_K", "0")]).is_err());
        assert!(config(&[("DEFAULT_TOP_K", "51")]).is_err());
    }
}
