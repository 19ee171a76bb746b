//! Data model for parsed benchmark logs.
//!
//! A log is a sequence of runs. Each run has one header (`RunInfo`)
//! followed by zero or more timed stages.

use serde::{Deserialize, Serialize};

/// Metadata from a run header line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInfo {
    /// Timestamp token (not validated)
    pub timestamp: String,

    /// Source revision the benchmark ran against
    pub commit: String,

    /// Machine that ran the benchmark
    pub host: String,

    /// Toolchain version, only present on 4-part headers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolchain_version: Option<String>,
}

/// One timed measurement within a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Zero-based position within the run
    pub index: usize,

    /// Label between the brackets, e.g. `build`
    pub stage_name: String,

    /// Label before the colon, e.g. `compile`
    pub metric_name: String,

    /// Operations per second
    pub rate: u64,
}

/// A complete run: header plus its stages in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRun {
    pub info: RunInfo,
    pub stages: Vec<Stage>,
}

impl BenchmarkRun {
    /// Start a run with no stages
    pub fn new(info: RunInfo) -> Self {
        Self {
            info,
            stages: Vec::new(),
        }
    }

    /// Append a stage, assigning the next index
    pub fn push_stage(&mut self, stage_name: String, metric_name: String, rate: u64) {
        let index = self.stages.len();
        self.stages.push(Stage {
            index,
            stage_name,
            metric_name,
            rate,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
