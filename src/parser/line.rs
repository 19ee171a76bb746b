//! Classification of a single log line.
//!
//! Lines are checked after trimming, in this order:
//! comment, stage, header. Anything that is neither a comment nor a
//! stage is treated as a header, including blank lines.

use super::schema::RunInfo;
use crate::utils::config::{
    COMMENT_PREFIX, HEADER_SEPARATOR, MAX_HEADER_PARTS, MIN_HEADER_PARTS, STAGE_LINE_PATTERN,
};
use once_cell::sync::Lazy;
use regex::Regex;

static STAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(STAGE_LINE_PATTERN).expect("stage line pattern must compile")
});

/// What a trimmed line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# ...`, skipped entirely
    Comment,

    /// `[name] metric: 123 / s`, rate still as its digit string
    Stage {
        stage_name: &'a str,
        metric_name: &'a str,
        rate: &'a str,
    },

    /// Anything else: a run header, split on the separator
    Header(Vec<&'a str>),
}

/// Classify a line
///
/// **Public** - used by the run assembler, also handy for tooling
///
/// The input is trimmed here; callers may pass raw lines.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();

    if line.starts_with(COMMENT_PREFIX) {
        return LineKind::Comment;
    }

    if let Some(caps) = STAGE_LINE.captures(line) {
        // All three groups are mandatory in the pattern
        if let (Some(name), Some(metric), Some(rate)) = (caps.get(1), caps.get(2), caps.get(3)) {
            return LineKind::Stage {
                stage_name: name.as_str(),
                metric_name: metric.as_str(),
                rate: rate.as_str(),
            };
        }
    }

    LineKind::Header(line.split(HEADER_SEPARATOR).collect())
}

/// Build a `RunInfo` from header parts
///
/// Returns `None` unless there are 3 or 4 parts.
pub fn run_info_from_parts(parts: &[&str]) -> Option<RunInfo> {
    if parts.len() < MIN_HEADER_PARTS || parts.len() > MAX_HEADER_PARTS {
        return None;
    }

    Some(RunInfo {
        timestamp: parts[0].to_string(),
        commit: parts[1].to_string(),
        host: parts[2].to_string(),
        toolchain_version: parts.get(3).map(|s| s.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_line() {
        assert_eq!(classify_line("# hello"), LineKind::Comment);
        assert_eq!(classify_line("   #indented"), LineKind::Comment);
    }

    #[test]
    fn test_stage_line() {
        assert_eq!(
            classify_line("[build] compile: 120 / s"),
            LineKind::Stage {
                stage_name: "build",
                metric_name: "compile",
                rate: "120",
            }
        );
    }

    #[test]
    fn test_stage_line_whitespace_tolerant() {
        assert_eq!(
            classify_line("  [  parse ]   tokens per file :  42/s  "),
            LineKind::Stage {
                stage_name: "parse",
                metric_name: "tokens per file ",
                rate: "42",
            }
        );
    }

    #[test]
    fn test_stage_line_metric_with_colon() {
        // Lazy metric match stops at the last colon before the digits
        match classify_line("[io] read: fast: 9 / s") {
            LineKind::Stage {
                metric_name, rate, ..
            } => {
                assert_eq!(metric_name, "read: fast");
                assert_eq!(rate, "9");
            }
            other => panic!("expected stage, got {:?}", other),
        }
    }

    #[test]
    fn test_stage_requires_per_second_suffix() {
        assert!(matches!(
            classify_line("[build] compile: 120"),
            LineKind::Header(_)
        ));
        assert!(matches!(
            classify_line("[build] compile: 120 / s extra"),
            LineKind::Header(_)
        ));
    }

    #[test]
    fn test_stage_name_with_space_is_not_a_stage() {
        assert!(matches!(
            classify_line("[build step] compile: 1 / s"),
            LineKind::Header(_)
        ));
    }

    #[test]
    fn test_header_line() {
        assert_eq!(
            classify_line("t1 - c1 - h1 - zig-0.13"),
            LineKind::Header(vec!["t1", "c1", "h1", "zig-0.13"])
        );
    }

    #[test]
    fn test_blank_line_is_header() {
        assert_eq!(classify_line("   "), LineKind::Header(vec![""]));
    }

    #[test]
    fn test_run_info_from_parts() {
        let info = run_info_from_parts(&["t", "c", "h"]).unwrap();
        assert_eq!(info.timestamp, "t");
        assert_eq!(info.toolchain_version, None);

        let info = run_info_from_parts(&["t", "c", "h", "z"]).unwrap();
        assert_eq!(info.toolchain_version.as_deref(), Some("z"));

        assert!(run_info_from_parts(&["a", "b"]).is_none());
        assert!(run_info_from_parts(&["a", "b", "c", "d", "e"]).is_none());
    }
}
