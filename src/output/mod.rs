//! Output writers for flattened rows.
//!
//! Rows are written as line-delimited JSON, either to standard output
//! or to a file.

pub mod jsonl;

// Re-export main functions
pub use jsonl::{create_output, read_rows, write_rows};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
