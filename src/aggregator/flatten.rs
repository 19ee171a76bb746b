//! Flatten runs into one row per stage.
//!
//! Each row repeats the run header fields, so rows can be written
//! independently as line-delimited JSON. A run without stages produces
//! no rows; its header is dropped from the output.

use crate::parser::schema::{BenchmarkRun, RunInfo, Stage};
use serde::{Deserialize, Serialize};

/// One output row: run metadata merged with a single stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRow {
    pub timestamp: String,
    pub commit: String,
    pub host: String,

    /// Toolchain version from 4-part headers
    #[serde(
        rename = "zig",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub toolchain_version: Option<String>,

    pub stage_index: usize,
    pub stage_name: String,
    pub metric_name: String,
    pub rate: u64,
}

impl FlatRow {
    /// Merge header fields with one stage
    pub fn new(info: &RunInfo, stage: &Stage) -> Self {
        Self {
            timestamp: info.timestamp.clone(),
            commit: info.commit.clone(),
            host: info.host.clone(),
            toolchain_version: info.toolchain_version.clone(),
            stage_index: stage.index,
            stage_name: stage.stage_name.clone(),
            metric_name: stage.metric_name.clone(),
            rate: stage.rate,
        }
    }
}

/// Flatten a run into rows, in stage order
///
/// **Public** - main entry point for flattening
///
/// Total: never fails. Returns an empty vector for a run with no stages.
pub fn flatten_run(run: &BenchmarkRun) -> Vec<FlatRow> {
    run.stages
        .iter()
        .map(|stage| FlatRow::new(&run.info, stage))
        .collect()
}

impl BenchmarkRun {
    /// Same as [`flatten_run`]
    pub fn flattened(&self) -> Vec<FlatRow> {
        flatten_run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zig_field_omitted_when_absent() {
        let run = BenchmarkRun {
            info: RunInfo {
                timestamp: "t".to_string(),
                commit: "c".to_string(),
                host: "h".to_string(),
                toolchain_version: None,
            },
            stages: vec![Stage {
                index: 0,
                stage_name: "a".to_string(),
                metric_name: "m".to_string(),
                rate: 1,
            }],
        };

        let json = serde_json::to_string(&flatten_run(&run)[0]).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"t","commit":"c","host":"h","stage_index":0,"stage_name":"a","metric_name":"m","rate":1}"#
        );
    }

    #[test]
    fn test_zig_field_present() {
        let mut run = BenchmarkRun::new(RunInfo {
            timestamp: "t1".to_string(),
            commit: "c1".to_string(),
            host: "h1".to_string(),
            toolchain_version: Some("zig-0.13".to_string()),
        });
        run.push_stage("a".to_string(), "m".to_string(), 1);

        let value = serde_json::to_value(&run.flattened()[0]).unwrap();
        assert_eq!(value["zig"], "zig-0.13");
        assert_eq!(value["stage_index"], 0);
    }
}
