//! Line-delimited JSON writer for flattened rows.
//!
//! One compact JSON object per line, in the order rows are produced.

use super::validate_path;
use crate::aggregator::FlatRow;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write rows as JSON lines
///
/// **Public** - main entry point for row output
///
/// # Arguments
/// * `writer` - destination; not flushed here
/// * `rows` - rows to write, in order
///
/// # Returns
/// Number of rows written
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_rows<'a, W: Write>(
    writer: &mut W,
    rows: impl IntoIterator<Item = &'a FlatRow>,
) -> Result<usize, OutputError> {
    let mut count = 0;

    for row in rows {
        serde_json::to_writer(&mut *writer, row)?;
        writer.write_all(b"\n")?;
        count += 1;
    }

    Ok(count)
}

/// Open the output destination
///
/// **Public** - used by commands to set up the sink
///
/// `None` writes to standard output. A path is validated and its parent
/// directories are created.
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, directory, or parent can't be created
/// * `OutputError::WriteFailed` - file can't be created
pub fn create_output(output_path: Option<&Path>) -> Result<Box<dyn Write>, OutputError> {
    let Some(output_path) = output_path else {
        debug!("Writing rows to standard output");
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    };

    info!("Writing rows to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;

    Ok(Box::new(BufWriter::new(file)))
}

/// Read rows back from a JSON lines file
///
/// **Public** - useful for validation and testing
///
/// Blank lines are skipped.
pub fn read_rows(input_path: impl AsRef<Path>) -> Result<Vec<FlatRow>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading rows from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let mut rows = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(serde_json::from_str(&line)?);
    }

    debug!("Loaded {} rows", rows.len());

    Ok(rows)
}
