//! Bench Log
//!
//! Converts human-written benchmark logs into line-delimited JSON rows.
//!
//! A log is a sequence of runs. Each run starts with a header line
//! (`timestamp - commit - host[ - zig]`) followed by stage lines
//! (`[stage] metric: 123 / s`). Comment lines start with `#`.
//!
//! ## Getting Started
//!
//! ```bash
//! bm2json convert bench.log -o rows.jsonl
//! bm2json --help
//! ```
//!
//! ## Library use
//!
//! ```
//! use bench_log::aggregator::flatten_run;
//! use bench_log::parser::load_benchmarks;
//!
//! let log = "t1 - c1 - h1\n[build] compile: 120 / s\n[test] unit: 45 / s";
//! let mut rows = Vec::new();
//! for run in load_benchmarks(log.lines()) {
//!     rows.extend(flatten_run(&run.unwrap()));
//! }
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[1].stage_index, 1);
//! ```

pub mod aggregator;
pub mod commands;
pub mod input;
pub mod output;
pub mod parser;
pub mod utils;
