//! Benchmark log parsing and data model.
//!
//! This module handles:
//! - Classifying raw lines (comment, stage, header)
//! - Grouping lines into runs with a small state machine
//! - Defining the parsed data model

pub mod bench_log;
pub mod line;
pub mod schema;

// Re-export main types
pub use bench_log::{load_benchmarks, read_benchmarks, AssemblerState, BenchmarkRuns, RunAssembler};
pub use line::{classify_line, LineKind};
pub use schema::{BenchmarkRun, RunInfo, Stage};
