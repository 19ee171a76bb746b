use std::path::PathBuf;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Log files to read in order; empty means standard input
    pub inputs: Vec<PathBuf>,

    /// Output path for JSON lines (None = standard output)
    pub output: Option<PathBuf>,

    /// Print text summary to stderr when done
    pub print_summary: bool,
}
