use crate::aggregator::{generate_text_summary, LogSummary};
use crate::input::LineSource;
use crate::parser::BenchmarkRuns;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Parse a log without writing rows, reporting what it contains
pub fn validate_log_file(inputs: &[PathBuf]) -> Result<LogSummary> {
    let source = LineSource::open(inputs).context("Failed to open log input")?;

    let mut summary = LogSummary::new();
    for run in BenchmarkRuns::new(source) {
        let run = run.context("Invalid benchmark log")?;
        summary.record(&run);
    }

    println!("✓ Valid benchmark log");
    println!("{}", generate_text_summary(&summary));

    Ok(summary)
}

/// Display row schema information
pub fn display_schema(show_details: bool) {
    println!("Benchmark Log Row Schema");
    println!("One JSON object per line, one line per stage.");
    println!();

    if show_details {
        println!("Row Structure:");
        println!("  timestamp: string    - Run timestamp from the header line");
        println!("  commit: string       - Source revision");
        println!("  host: string         - Machine that ran the benchmark");
        println!("  zig: string?         - Toolchain version (4-part headers only)");
        println!("  stage_index: number  - Position of the stage within its run");
        println!("  stage_name: string   - Label in brackets");
        println!("  metric_name: string  - Label before the colon");
        println!("  rate: number         - Operations per second");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("bm2json v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Converts benchmark logs into line-delimited JSON rows.");
}
