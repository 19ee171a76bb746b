//! Concatenated line source over files and standard input.

use crate::utils::config::STDIN_PATH;
use crate::utils::error::InputError;
use log::{debug, info};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Lines from several inputs, read one after another
///
/// All inputs are opened up front so a missing file fails before any
/// line is read. A run may continue from one input into the next.
pub struct LineSource {
    readers: VecDeque<Lines<Box<dyn BufRead>>>,
}

impl LineSource {
    /// Open the given paths in order
    ///
    /// **Public** - main entry point for reading logs
    ///
    /// # Arguments
    /// * `paths` - files to read; empty or `-` means standard input
    ///
    /// # Errors
    /// * `InputError::OpenFailed` - a file could not be opened
    /// * `InputError::StdinRepeated` - `-` given more than once
    pub fn open(paths: &[PathBuf]) -> Result<Self, InputError> {
        // Standard input can only be locked once per thread
        let stdin_count = paths.iter().filter(|p| p.as_os_str() == STDIN_PATH).count();
        if stdin_count > 1 {
            return Err(InputError::StdinRepeated(stdin_count));
        }

        let mut readers = VecDeque::with_capacity(paths.len().max(1));

        if paths.is_empty() {
            debug!("No inputs given, reading standard input");
            readers.push_back(stdin_reader().lines());
        }

        for path in paths {
            readers.push_back(open_reader(path)?.lines());
        }

        Ok(Self { readers })
    }

    /// Wrap an already open reader
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        let reader: Box<dyn BufRead> = Box::new(reader);
        Self {
            readers: VecDeque::from([reader.lines()]),
        }
    }
}

impl Iterator for LineSource {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.readers.front_mut() {
            match current.next() {
                Some(line) => return Some(line),
                None => {
                    self.readers.pop_front();
                }
            }
        }
        None
    }
}

/// Open one input, treating `-` as standard input
///
/// **Private** - internal helper for LineSource::open
fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    if path.as_os_str() == STDIN_PATH {
        debug!("Reading standard input");
        return Ok(stdin_reader());
    }

    info!("Reading log: {}", path.display());

    let file = File::open(path).map_err(|source| InputError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Box::new(BufReader::new(file)))
}

fn stdin_reader() -> Box<dyn BufRead> {
    Box::new(io::stdin().lock())
}
