use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use super::BookRecord;
use crate::storage::{JsonlStorage, Storage};

pub const ERROR_SEPARATOR: &str = " | ";

/// Result of one aggregation run over a batch of pages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutcome {
    pub records: Vec<BookRecord>,
    pub success: bool,
    pub error: Option<String>,
}

impl ParseOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            success: false,
            error: Some(message.into()),
        }
    }

    /// Append a message to the error summary, keeping what is already there.
    pub fn push_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.error = Some(match self.error.take() {
            Some(prev) => format!("{prev}{ERROR_SEPARATOR}{message}"),
            None => message,
        });
    }

    /// Write the records as JSON Lines. A failed write is reported through
    /// `error`; the in-memory records are left as they are.
    pub fn save_jsonl(&mut self, path: impl AsRef<Path>) -> Option<PathBuf> {
        let path = path.as_ref();
        match JsonlStorage.save(path, &self.records) {
            Ok(()) => {
                info!("Saved {} records to {}", self.records.len(), path.display());
                Some(path.to_path_buf())
            }
            Err(e) => {
                error!("Failed to save records to {}: {}", path.display(), e);
                self.push_error(format!("SaveError({}): {}", e.kind_name(), e));
                None
            }
        }
    }
}
