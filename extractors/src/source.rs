//! Reading source text from disk.
//!
//! Extraction itself never touches the filesystem; callers read the whole
//! file here first and hand the text over.

use shared_types::ExtractionError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole file as UTF-8 text
pub fn read_source(path: &Path) -> Result<String, ExtractionError> {
    let bytes = read_source_bytes(path)?;

    String::from_utf8(bytes).map_err(|e| ExtractionError::ReadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read a whole file as raw bytes
pub fn read_source_bytes(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    if !path.exists() {
        return Err(ExtractionError::NotFound(path.to_path_buf()));
    }

    let content = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ExtractionError::NotFound(path.to_path_buf()),
        _ => ExtractionError::ReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    tracing::debug!("File read: {}", path.display());
    Ok(content)
}
