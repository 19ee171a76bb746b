//! Streaming parser for benchmark logs.
//!
//! Lines are grouped into runs by a two-state machine: either no run is
//! open yet, or one run is open and collecting stages. A run is handed
//! out when the next header arrives or when input ends; there is no
//! terminator line.

use super::line::{classify_line, run_info_from_parts, LineKind};
use super::schema::BenchmarkRun;
use crate::utils::error::ParseError;
use log::debug;
use std::io::{self, BufRead};

/// Parser state between lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssemblerState {
    /// No header seen yet
    #[default]
    NoOpenRun,
    /// A header was seen; stages accumulate here
    OpenRun(BenchmarkRun),
}

/// Line-at-a-time run assembler
///
/// Holds no I/O; feed it lines and collect the finished runs it returns.
#[derive(Debug, Default)]
pub struct RunAssembler {
    state: AssemblerState,
    interrupted: Option<BenchmarkRun>,
}

impl RunAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, mostly for tests and diagnostics
    pub fn state(&self) -> &AssemblerState {
        &self.state
    }

    /// Run closed by a header that then failed to parse
    ///
    /// The run is complete and still belongs to the caller; it is handed
    /// out here because `feed` can only return the error.
    pub fn take_interrupted(&mut self) -> Option<BenchmarkRun> {
        self.interrupted.take()
    }

    /// Process one line
    ///
    /// **Public** - main entry point of the state machine
    ///
    /// # Arguments
    /// * `line_no` - 1-based line number, used in errors
    /// * `line` - raw line, trimmed here
    ///
    /// # Returns
    /// The previous run when `line` is a header that closes it
    ///
    /// A malformed header still closes the open run; collect it with
    /// `take_interrupted` after the error.
    ///
    /// # Errors
    /// * `ParseError::SequencingError` - stage line with no open run
    /// * `ParseError::MalformedHeaderError` - header without 3 or 4 parts
    /// * `ParseError::InvalidRateError` - rate digits overflow `u64`
    pub fn feed(
        &mut self,
        line_no: usize,
        line: &str,
    ) -> Result<Option<BenchmarkRun>, ParseError> {
        match classify_line(line) {
            LineKind::Comment => Ok(None),

            LineKind::Stage {
                stage_name,
                metric_name,
                rate,
            } => {
                let AssemblerState::OpenRun(run) = &mut self.state else {
                    return Err(ParseError::SequencingError {
                        line: line_no,
                        text: line.trim().to_string(),
                    });
                };

                let rate = rate.parse::<u64>().map_err(|_| ParseError::InvalidRateError {
                    line: line_no,
                    value: rate.to_string(),
                })?;

                run.push_stage(stage_name.to_string(), metric_name.to_string(), rate);
                Ok(None)
            }

            LineKind::Header(parts) => {
                let previous = close_run(std::mem::take(&mut self.state));

                let Some(info) = run_info_from_parts(&parts) else {
                    self.interrupted = previous;
                    return Err(ParseError::MalformedHeaderError {
                        line: line_no,
                        parts: parts.len(),
                        text: line.trim().to_string(),
                    });
                };

                debug!(
                    "Line {}: opening run {} / {} / {}",
                    line_no, info.timestamp, info.commit, info.host
                );

                self.state = AssemblerState::OpenRun(BenchmarkRun::new(info));
                Ok(previous)
            }
        }
    }

    /// Finish input, returning the run still open (if any)
    pub fn finish(self) -> Option<BenchmarkRun> {
        close_run(self.state)
    }
}

/// Extract the run from a state, logging that it closed
///
/// **Private** - shared by header handling and end of input
fn close_run(state: AssemblerState) -> Option<BenchmarkRun> {
    match state {
        AssemblerState::NoOpenRun => None,
        AssemblerState::OpenRun(run) => {
            debug!(
                "Closing run {} with {} stages",
                run.info.timestamp,
                run.stages.len()
            );
            Some(run)
        }
    }
}

/// Lazy iterator of runs over a line source
///
/// Pull-based: each `next()` reads only as many lines as it takes to
/// close one run. A run closed by a failing header is yielded before
/// the error; after the error it yields nothing more.
/// Dropping it discards any run that is still open.
pub struct BenchmarkRuns<I> {
    lines: I,
    assembler: Option<RunAssembler>,
    pending: Option<ParseError>,
    line_no: usize,
}

impl<I> BenchmarkRuns<I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            assembler: Some(RunAssembler::new()),
            pending: None,
            line_no: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl<I, L> Iterator for BenchmarkRuns<I>
where
    I: Iterator<Item = io::Result<L>>,
    L: AsRef<str>,
{
    type Item = Result<BenchmarkRun, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.pending.take() {
            return Some(Err(e));
        }

        let assembler = self.assembler.as_mut()?;

        loop {
            let Some(line) = self.lines.next() else {
                // Input exhausted: flush the open run and stop for good
                return self.assembler.take().and_then(RunAssembler::finish).map(Ok);
            };

            self.line_no += 1;

            let result = line
                .map_err(ParseError::from)
                .and_then(|line| assembler.feed(self.line_no, line.as_ref()));

            match result {
                Ok(Some(run)) => return Some(Ok(run)),
                Ok(None) => continue,
                Err(e) => {
                    let closed = assembler.take_interrupted();
                    self.assembler = None;

                    let Some(run) = closed else {
                        return Some(Err(e));
                    };
                    self.pending = Some(e);
                    return Some(Ok(run));
                }
            }
        }
    }
}

impl<I, L> std::iter::FusedIterator for BenchmarkRuns<I>
where
    I: Iterator<Item = io::Result<L>>,
    L: AsRef<str>,
{
}

/// Parse runs from in-memory lines
///
/// **Public** - main entry point for parsing
///
/// # Example
/// ```
/// use bench_log::parser::load_benchmarks;
///
/// let log = "t1 - c1 - h1\n[a] m: 1 / s";
/// let runs: Vec<_> = load_benchmarks(log.lines()).collect::<Result<_, _>>().unwrap();
/// assert_eq!(runs.len(), 1);
/// assert_eq!(runs[0].stages[0].rate, 1);
/// ```
pub fn load_benchmarks<I>(lines: I) -> impl Iterator<Item = Result<BenchmarkRun, ParseError>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    BenchmarkRuns::new(lines.into_iter().map(Ok::<_, io::Error>))
}

/// Parse runs from a buffered reader
///
/// I/O errors are fatal and surface as `ParseError::Io`.
pub fn read_benchmarks<R: BufRead>(reader: R) -> BenchmarkRuns<io::Lines<R>> {
    BenchmarkRuns::new(reader.lines())
}
