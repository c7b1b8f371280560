use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTML file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid selector '{css}': {reason}")]
    Selector { css: String, reason: String },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("extraction panicked: {0}")]
    Panic(String),

    #[error("page task failed: {0}")]
    Join(String),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short variant name used in error summaries.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CatalogError::NotFound(_) => "NotFound",
            CatalogError::Io { .. } => "Io",
            CatalogError::Selector { .. } => "Selector",
            CatalogError::Serialize(_) => "Serialize",
            CatalogError::Panic(_) => "Panic",
            CatalogError::Join(_) => "Join",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
