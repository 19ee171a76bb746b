//! Configuration and constants for the log format.

/// Separator between header fields (`timestamp - commit - host[ - zig]`)
pub const HEADER_SEPARATOR: &str = " - ";

/// Lines starting with this prefix (after trimming) are ignored
pub const COMMENT_PREFIX: char = '#';

/// A header must split into at least this many parts
pub const MIN_HEADER_PARTS: usize = 3;

/// A header may split into at most this many parts (the last one is the toolchain)
pub const MAX_HEADER_PARTS: usize = 4;

/// Stage line grammar: `[name] metric label: 123 / s`
///
/// Anchored so the whole trimmed line has to match.
pub const STAGE_LINE_PATTERN: &str = r"^\[\s*(\S+)\s*\]\s*(.+?):\s*(\d+)\s*/\s*s$";

/// Path argument meaning "read from standard input"
pub const STDIN_PATH: &str = "-";
