//! Filesystem helpers for resxcheck.

use crate::error::{ResxCheckError, Result};
use std::path::Path;

/// Read an entire file as UTF-8 text.
///
/// # Arguments
///
/// * `path` - Path to the file to read
///
/// # Returns
///
/// * `Ok(String)` - The file content
/// * `Err(ResxCheckError::UserError)` - The file is missing, unreadable, or not valid UTF-8
pub fn read_file_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    std::fs::read_to_string(path).map_err(|e| {
        ResxCheckError::UserError(format!("failed to read file {}: {}", path.display(), e))
    })
}
