use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// Read a file as UTF-8, dropping byte sequences that do not decode.
pub fn read_html_lossy(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|e| CatalogError::io(path, e))?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes())
            .chars()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect(),
    })
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
        }
    }
    Ok(())
}
