//! # Input Reader
//!
//! Lazily turns files (or standard input) into a stream of numbers. Blank
//! lines and `#` comments are skipped; anything else must parse as a float.
//! The reader stops after the first error so callers can fail fast.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::CalcError;

/// Argument that selects standard input explicitly
pub const STDIN_ARG: &str = "-";

/// Where numbers are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Build the source list from command-line paths
    ///
    /// No paths means standard input; `-` stands for standard input too.
    pub fn from_args(paths: &[PathBuf]) -> Vec<InputSource> {
        if paths.is_empty() {
            return vec![InputSource::Stdin];
        }

        paths
            .iter()
            .map(|path| {
                if path.as_os_str() == STDIN_ARG {
                    InputSource::Stdin
                } else {
                    InputSource::File(path.clone())
                }
            })
            .collect()
    }

    /// Display name used in error messages
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => {
                if atty::is(atty::Stream::Stdin) {
                    tracing::debug!("Waiting for numbers on an interactive stdin");
                }
                Ok(Box::new(io::stdin().lock()))
            }
            InputSource::File(path) => open_file(path),
        }
    }
}

fn open_file(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    Ok(Box::new(BufReader::new(file)))
}

/// Parse one input line
///
/// Returns `None` for blank lines and lines whose first non-space character
/// is `#`.
pub fn parse_line(line: &str) -> Option<Result<f64, std::num::ParseFloatError>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed.parse())
    }
}

struct OpenSource {
    name: String,
    reader: Box<dyn BufRead>,
    line: usize,
}

/// Iterator over the numbers of several sources, read one line at a time
pub struct NumberReader {
    pending: VecDeque<InputSource>,
    current: Option<OpenSource>,
    failed: bool,
    buffer: String,
}

impl NumberReader {
    pub fn new(sources: Vec<InputSource>) -> Self {
        Self {
            pending: sources.into(),
            current: None,
            failed: false,
            buffer: String::new(),
        }
    }

    /// Read from an already open reader, named `name` in error messages
    pub fn from_reader(name: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        let mut numbers = Self::new(Vec::new());
        numbers.current = Some(OpenSource {
            name: name.into(),
            reader: Box::new(reader),
            line: 0,
        });
        numbers
    }

    fn fail(&mut self, error: CalcError) -> Option<Result<f64, CalcError>> {
        self.failed = true;
        self.current = None;
        Some(Err(error))
    }
}

impl Iterator for NumberReader {
    type Item = Result<f64, CalcError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.failed {
                return None;
            }

            if self.current.is_none() {
                let next = self.pending.pop_front()?;
                tracing::debug!("Reading numbers from {}", next.name());
                match next.open() {
                    Ok(reader) => {
                        self.current = Some(OpenSource {
                            name: next.name(),
                            reader,
                            line: 0,
                        });
                    }
                    Err(source) => {
                        return self.fail(CalcError::Io {
                            source_name: next.name(),
                            source,
                        });
                    }
                }
                continue;
            }

            let Some(source) = self.current.as_mut() else {
                continue;
            };

            self.buffer.clear();
            match source.reader.read_line(&mut self.buffer) {
                Ok(0) => {
                    tracing::debug!("Finished {} after {} lines", source.name, source.line);
                    self.current = None;
                }
                Ok(_) => {
                    source.line += 1;
                    match parse_line(&self.buffer) {
                        None => continue,
                        Some(Ok(value)) => return Some(Ok(value)),
                        Some(Err(_)) => {
                            let error = CalcError::MalformedInput {
                                source_name: source.name.clone(),
                                line: source.line,
                                content: self.buffer.trim().to_string(),
                            };
                            return self.fail(error);
                        }
                    }
                }
                Err(error) => {
                    let error = CalcError::Io {
                        source_name: source.name.clone(),
                        source: error,
                    };
                    return self.fail(error);
                }
            }
        }
    }
}
