use futures::future::join_all;
use std::collections::HashSet;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{CatalogError, Result};
use crate::extractors::{extract_page, BlockLocator};
use crate::models::{BookRecord, ParseOutcome, ERROR_SEPARATOR};
use crate::utils::fs::read_html_lossy;

pub const NO_PATHS_ERROR: &str = "No HTML paths provided";
pub const NO_RECORDS_ERROR: &str = "No item blocks parsed (DOM mode).";

/// Saved result pages of one catalog search, in page order.
#[derive(Debug, Clone, Default)]
pub struct ParseRequest {
    pub paths: Vec<PathBuf>,
    /// District the pages came from; informational only.
    pub place: Option<String>,
}

impl ParseRequest {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            place: None,
        }
    }

    pub fn with_place(mut self, place: Option<String>) -> Self {
        self.place = place;
        self
    }
}

/// Failure of a single page; the rest of the batch is unaffected.
#[derive(Debug)]
pub struct PageError {
    pub page: usize,
    pub error: CatalogError,
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            CatalogError::NotFound(_) => write!(f, "[Page {}] {}", self.page, self.error),
            other => write!(f, "[Page {}] Parse error: {}", self.page, other),
        }
    }
}

/// Extraction engine shared by every page of a batch.
#[derive(Debug, Default)]
pub struct CatalogParser {
    locator: BlockLocator,
}

impl CatalogParser {
    pub fn new(locator: BlockLocator) -> Self {
        Self { locator }
    }

    /// Records of one saved page. Nothing from the page is kept on error.
    pub fn parse_page(&self, path: &Path) -> Result<Vec<BookRecord>> {
        let html = read_html_lossy(path)?;
        Ok(extract_page(&html, &self.locator))
    }

    /// [`Self::parse_page`], with a panic in extraction turned into a page error.
    fn parse_page_contained(&self, path: &Path) -> Result<Vec<BookRecord>> {
        contain_panic(|| self.parse_page(path))
    }

    /// Parse every page in order, then merge and deduplicate.
    pub fn parse_pages(&self, request: &ParseRequest) -> ParseOutcome {
        if request.paths.is_empty() {
            return ParseOutcome::failed(NO_PATHS_ERROR);
        }
        log_request(request);

        let results = request
            .paths
            .iter()
            .map(|path| self.parse_page_contained(path))
            .collect();

        merge_pages(&request.paths, results)
    }
}

/// Same as [`CatalogParser::parse_pages`], with each page parsed on the
/// blocking pool. Merge and dedup still run once, in input order.
pub async fn parse_pages_concurrent(
    parser: Arc<CatalogParser>,
    request: &ParseRequest,
) -> ParseOutcome {
    if request.paths.is_empty() {
        return ParseOutcome::failed(NO_PATHS_ERROR);
    }
    log_request(request);

    let tasks = request.paths.iter().cloned().map(|path| {
        let parser = parser.clone();
        tokio::task::spawn_blocking(move || parser.parse_page_contained(&path))
    });

    let results = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.unwrap_or_else(|e| Err(CatalogError::Join(e.to_string()))))
        .collect();

    merge_pages(&request.paths, results)
}

fn contain_panic<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(CatalogError::Panic(message))
    })
}

fn log_request(request: &ParseRequest) {
    info!(
        "Parsing {} page(s) for {}",
        request.paths.len(),
        request.place.as_deref().unwrap_or("unspecified place")
    );
}

fn merge_pages(paths: &[PathBuf], results: Vec<Result<Vec<BookRecord>>>) -> ParseOutcome {
    let mut all_records = Vec::new();
    let mut errors = Vec::new();

    for (idx, (path, result)) in paths.iter().zip(results).enumerate() {
        let page = idx + 1;
        match result {
            Ok(records) => {
                info!(
                    "Page {} parsed: {} records ({})",
                    page,
                    records.len(),
                    path.file_name()
                        .map(|n| n.to_string_lossy())
                        .unwrap_or_default()
                );
                all_records.extend(records);
            }
            Err(error) => {
                let page_error = PageError { page, error };
                warn!("{}", page_error);
                errors.push(page_error.to_string());
            }
        }
    }

    let total = all_records.len();
    let records = dedup_records(all_records);
    if records.len() < total {
        info!(
            "Removed {} duplicate records ({} remain)",
            total - records.len(),
            records.len()
        );
    }

    let success = !records.is_empty();
    let error = if !errors.is_empty() {
        Some(errors.join(ERROR_SEPARATOR))
    } else if !success {
        Some(NO_RECORDS_ERROR.to_string())
    } else {
        None
    };

    ParseOutcome {
        records,
        success,
        error,
    }
}

/// Keep the first record of every (title, library) pair, in order.
pub fn dedup_records(records: Vec<BookRecord>) -> Vec<BookRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.key()))
        .collect()
}
