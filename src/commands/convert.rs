//! Convert command implementation.
//!
//! The convert command:
//! 1. Opens the log inputs as one line stream
//! 2. Parses runs lazily
//! 3. Flattens each run into rows
//! 4. Writes rows as JSON lines as soon as each run closes

use crate::aggregator::{flatten_run, generate_text_summary, LogSummary};
use crate::commands::models::ConvertArgs;
use crate::input::LineSource;
use crate::output::{create_output, validate_path, write_rows};
use crate::parser::BenchmarkRuns;
use crate::utils::config::STDIN_PATH;
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::time::Instant;

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// Rows from runs that closed before a parse error are already written
/// (and flushed) when the error is returned.
///
/// # Errors
/// * Input files that can't be opened
/// * Parse errors (stage before header, malformed header, I/O)
/// * Output write errors
pub fn execute_convert(args: ConvertArgs) -> Result<LogSummary> {
    let start_time = Instant::now();

    let source = LineSource::open(&args.inputs).context("Failed to open log input")?;
    let mut out = create_output(args.output.as_deref()).context("Failed to open output")?;

    let mut summary = LogSummary::new();
    let result = convert_stream(BenchmarkRuns::new(source), &mut out, &mut summary);

    // Flush whatever was written, even when parsing failed midway
    out.flush().context("Failed to flush output")?;
    result?;

    info!(
        "Converted {} runs into {} rows in {:.2?}",
        summary.runs,
        summary.rows(),
        start_time.elapsed()
    );

    if args.print_summary {
        eprintln!("{}", generate_text_summary(&summary));
    }

    Ok(summary)
}

/// Drive runs from the parser into the writer
///
/// **Public** - usable with any line iterator and sink
pub fn convert_stream<I, L, W>(
    runs: BenchmarkRuns<I>,
    out: &mut W,
    summary: &mut LogSummary,
) -> Result<usize>
where
    I: Iterator<Item = std::io::Result<L>>,
    L: AsRef<str>,
    W: Write,
{
    let mut written = 0;

    for run in runs {
        let run = match run {
            Ok(run) => run,
            Err(e) => {
                if let Some(line) = e.line() {
                    warn!("Parsing stopped at line {} after {} runs", line, summary.runs);
                }
                return Err(e).context("Failed to parse benchmark log");
            }
        };
        summary.record(&run);

        let rows = flatten_run(&run);
        debug!(
            "Run {} produced {} rows",
            run.info.timestamp,
            rows.len()
        );

        written += write_rows(out, &rows).context("Failed to write rows")?;
    }

    Ok(written)
}

/// Validate convert arguments
///
/// **Public** - called from main.rs before execution
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if let Some(output) = &args.output {
        validate_path(output).context("Invalid output path")?;
    }

    let stdin_count = args
        .inputs
        .iter()
        .filter(|p| p.as_os_str() == STDIN_PATH)
        .count();
    if stdin_count > 1 {
        bail!("Standard input ('-') can only be given once");
    }

    Ok(())
}
