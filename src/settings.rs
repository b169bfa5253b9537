use std::path::PathBuf;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/SimplifyJobs/Summer2025-Internships/dev/README.md";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Raw README the postings table is scraped from.
    pub source_url: String,
    /// Filtered table snapshot written by `fetch`.
    pub raw_path: PathBuf,
    /// Batch CSV written by `normalize` and rewritten by `merge`.
    pub batch_path: PathBuf,
    /// Accumulated dataset. Read-only for this program.
    pub dataset_path: PathBuf,
}

impl Settings {
    /// Built-in defaults, overridden by an optional `scraper.toml`, then by
    /// `INTERN_*` environment variables.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("source_url", DEFAULT_SOURCE_URL)?
            .set_default("raw_path", "data/raw.txt")?
            .set_default("batch_path", "data/new_clean.csv")?
            .set_default("dataset_path", "data/clean.csv")?
            .add_source(config::File::with_name("scraper").required(false))
            .add_source(config::Environment::with_prefix("INTERN"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
