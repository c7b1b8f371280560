use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::BookRecord;
use crate::storage::Storage;
use crate::utils::fs::ensure_parent_dir;

/// One JSON object per line, UTF-8 kept as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlStorage;

impl Storage for JsonlStorage {
    fn save(&self, path: &Path, records: &[BookRecord]) -> Result<()> {
        ensure_parent_dir(path)?;

        let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        for record in records {
            serde_json::to_writer(&mut writer, record)?;
            writer
                .write_all(b"\n")
                .map_err(|e| CatalogError::io(path, e))?;
        }
        writer.flush().map_err(|e| CatalogError::io(path, e))?;

        debug!("Wrote {} lines to {}", records.len(), path.display());
        Ok(())
    }
}
