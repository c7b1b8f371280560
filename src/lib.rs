//! Book availability records from saved public-library catalog pages.
//!
//! Each saved search-result page is parsed, cut into item blocks by a cascade
//! of known template selectors, and every block is turned into a
//! [`BookRecord`] by per-field extraction strategies. Pages are then merged
//! and deduplicated by `(title, library)`.

pub mod config;
pub mod error;
pub mod extractors;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod storage;
pub mod utils;

pub use error::{CatalogError, Result};
pub use extractors::{BlockLocator, BlockTier, DEFAULT_TIERS};
pub use models::{BookRecord, ParseOutcome};
pub use pipeline::{dedup_records, parse_pages_concurrent, CatalogParser, ParseRequest};
pub use storage::{JsonlStorage, Storage};
