// ABOUTME: Filesystem helpers for the pitch-deck application
// ABOUTME: Resolves and prepares the directory that receives the output file

use crate::errors::{DeckError, Result};
use std::path::{Path, PathBuf};

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(DeckError::Validation(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Directory that will hold `file_path`; a bare file name resolves to `.`.
pub fn parent_directory(file_path: &Path) -> PathBuf {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Ensure a file's parent directory exists and return it
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<PathBuf> {
    let parent = parent_directory(file_path);
    ensure_directory_exists(&parent)?;
    Ok(parent)
}

/// Reject output paths that name an existing directory.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(DeckError::Validation("Output path is empty".to_string()));
    }
    if path.is_dir() {
        return Err(DeckError::Validation(format!(
            "Output path is a directory: {:?}",
            path
        )));
    }
    Ok(())
}
