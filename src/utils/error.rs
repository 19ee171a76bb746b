//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a benchmark log
///
/// Every variant is fatal: the parser stops producing runs after the first one.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: stage found before benchmark info: {text:?}")]
    SequencingError { line: usize, text: String },

    #[error("line {line}: invalid benchmark info line ({parts} parts, expected 3 or 4): {text:?}")]
    MalformedHeaderError {
        line: usize,
        parts: usize,
        text: String,
    },

    #[error("line {line}: rate {value} does not fit in 64 bits")]
    InvalidRateError { line: usize, value: String },

    #[error("Failed to read line: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// 1-based line number the error was raised at, if it came from a line
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::SequencingError { line, .. }
            | Self::MalformedHeaderError { line, .. }
            | Self::InvalidRateError { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}

/// Errors that can occur while opening log inputs
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to open {}: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Standard input ('-') given {0} times, it can only be read once")]
    StdinRepeated(usize),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
