//! Transform parsed runs into output rows and statistics.
//!
//! - Flattening: one row per stage, header fields repeated
//! - Metrics: run/stage/row counts and peak rates

pub mod flatten;
pub mod metrics;

// Re-export main functions
pub use flatten::{flatten_run, FlatRow};
pub use metrics::{generate_text_summary, summarize, LogSummary};
