//! Summary statistics over parsed runs.
//!
//! Used by the `--summary` flag and the `validate` command. Counts are
//! accumulated run by run so the summary works on a stream.

use crate::parser::schema::BenchmarkRun;
use std::collections::{BTreeMap, BTreeSet};

/// Running totals over a log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSummary {
    /// Runs seen (one per header line)
    pub runs: usize,

    /// Stage lines across all runs
    pub stages: usize,

    /// Runs with no stages; these contribute no rows
    pub empty_runs: usize,

    /// Distinct hosts
    pub hosts: BTreeSet<String>,

    /// Highest rate seen per stage name
    pub peak_rates: BTreeMap<String, u64>,
}

impl LogSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one run into the totals
    pub fn record(&mut self, run: &BenchmarkRun) {
        self.runs += 1;
        self.stages += run.stages.len();
        if run.is_empty() {
            self.empty_runs += 1;
        }
        self.hosts.insert(run.info.host.clone());

        for stage in &run.stages {
            let peak = self.peak_rates.entry(stage.stage_name.clone()).or_insert(0);
            *peak = (*peak).max(stage.rate);
        }
    }

    /// Rows the flattener produces for the recorded runs
    pub fn rows(&self) -> usize {
        // One row per stage, regardless of run
        self.stages
    }
}

/// Build a summary from a complete set of runs
pub fn summarize<'a>(runs: impl IntoIterator<Item = &'a BenchmarkRun>) -> LogSummary {
    let mut summary = LogSummary::new();
    for run in runs {
        summary.record(run);
    }
    summary
}

/// Render a summary for terminal output
///
/// **Public** - used by commands
pub fn generate_text_summary(summary: &LogSummary) -> String {
    let mut lines = vec![
        "  BENCHMARK LOG SUMMARY".to_string(),
        format!("  Runs:        {}", summary.runs),
        format!("  Stages:      {}", summary.stages),
        format!("  Rows:        {}", summary.rows()),
        format!("  Hosts:       {}", summary.hosts.len()),
    ];

    if summary.empty_runs > 0 {
        lines.push(format!(
            "  Empty runs:  {} (no rows emitted)",
            summary.empty_runs
        ));
    }

    if !summary.peak_rates.is_empty() {
        lines.push(String::new());
        lines.push(format!("  {:<24} {:>14}", "Stage", "Peak rate /s"));
        for (name, rate) in &summary.peak_rates {
            lines.push(format!("  {:<24} {:>14}", name, rate));
        }
    }

    lines.join("\n")
}
