use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "catalog";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root for date-stamped output when no explicit path is given.
    pub output_dir: PathBuf,
    /// Parse pages on the blocking pool instead of one after another.
    pub concurrent: bool,
    /// Records echoed in the run summary.
    pub sample_count: usize,
    pub log_filter: String,
    pub save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data/parsed"),
            concurrent: false,
            sample_count: 3,
            log_filter: "catalog_parser=info".to_string(),
            save: true,
        }
    }
}

impl Settings {
    /// Defaults, then `catalog.toml` (or `$CATALOG_CONFIG`) if present, then
    /// `CATALOG_*` environment variables.
    pub fn load() -> Result<Self> {
        let file =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let defaults = Settings::default();

        config::Config::builder()
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("concurrent", defaults.concurrent)?
            .set_default("sample_count", defaults.sample_count as i64)?
            .set_default("log_filter", defaults.log_filter)?
            .set_default("save", defaults.save)?
            .add_source(config::File::with_name(&file).required(false))
            .add_source(config::Environment::with_prefix("CATALOG").try_parsing(true))
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// `<output_dir>/<YYYY-MM-DD>/<place>_results.jsonl`
    pub fn default_output_path(&self, place: Option<&str>, date: NaiveDate) -> PathBuf {
        self.output_dir
            .join(date.format("%Y-%m-%d").to_string())
            .join(match place {
                Some(place) => format!("{place}_results.jsonl"),
                None => "results.jsonl".to_string(),
            })
    }

    pub fn today_output_path(&self, place: Option<&str>) -> PathBuf {
        self.default_output_path(place, Local::now().date_naive())
    }
}
