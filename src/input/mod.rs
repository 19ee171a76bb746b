//! Line supply for the parser: files and standard input.

pub mod source;

// Re-export main types
pub use source::LineSource;
