use std::path::Path;

use crate::error::Result;
use crate::models::BookRecord;

mod jsonl;
pub use jsonl::JsonlStorage;

/// Destination for a finished record list.
pub trait Storage {
    /// Write `records` to `path`, replacing anything already there.
    fn save(&self, path: &Path, records: &[BookRecord]) -> Result<()>;
}
