//! Streaming classifier that turns a lint report into a [`Classification`].

use crate::category::{is_path_line, Category};
use crate::types::{Classification, LineKind};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while classifying a report file.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ClassifyError {
    /// The report could not be opened or read.
    #[error("failed to read lint report {}", path.display())]
    #[diagnostic(
        code(lint_triage::io),
        help("pass the path of a text file containing linter output")
    )]
    Io {
        /// Path of the report.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

/// Line-by-line classifier state.
///
/// Feed lines in report order with [`Classifier::feed`], then call
/// [`Classifier::finish`]. A marker line is only attributed when a path line
/// has been seen before it.
#[derive(Debug, Default)]
pub struct Classifier {
    current: Option<String>,
    result: Classification,
}

impl Classifier {
    /// Creates a classifier with no current file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent path line, if any.
    #[must_use]
    pub fn current_file(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Processes one raw line and reports what was done with it.
    pub fn feed(&mut self, line: &str) -> LineKind {
        self.result.lines_read += 1;

        let line = line.trim_matches(is_padding);
        if line.is_empty() {
            return LineKind::Blank;
        }

        if is_path_line(line) {
            trace!(file = line, "file context");
            self.current = Some(line.to_owned());
            self.result.files_seen += 1;
            return LineKind::Path;
        }

        let Some(current) = self.current.as_deref() else {
            return LineKind::Orphan;
        };

        match Category::detect(line) {
            Some(category) => {
                if self.result.insert(category, current) {
                    debug!(file = current, %category, "categorized");
                }
                LineKind::Marker(category)
            }
            None => LineKind::Unmatched,
        }
    }

    /// Feeds a `\n`-delimited chunk, treating `\r\n` and a lone `\r` as line
    /// ends too.
    fn feed_chunk(&mut self, chunk: &str) {
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
        for line in chunk.split('\r') {
            self.feed(line);
        }
    }

    /// Ends the scan and returns the grouped files.
    #[must_use]
    pub fn finish(self) -> Classification {
        debug!(
            lines = self.result.lines_read,
            files = self.result.files_seen,
            entries = self.result.total_entries(),
            "scan complete"
        );
        self.result
    }
}

/// Whitespace stripped from both ends of a line: Unicode `White_Space` plus
/// the ASCII separators `\x1c` to `\x1f`.
fn is_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Classifies an in-memory report.
#[must_use]
pub fn classify_str(report: &str) -> Classification {
    let mut classifier = Classifier::new();
    for chunk in report.split_inclusive('\n') {
        classifier.feed_chunk(chunk.strip_suffix('\n').unwrap_or(chunk));
    }
    classifier.finish()
}

/// Classifies a report read from `reader`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Invalid UTF-8 is replaced
/// rather than rejected.
///
/// # Errors
///
/// Returns an error if reading from `reader` fails.
pub fn classify_reader<R: BufRead>(reader: R) -> io::Result<Classification> {
    let mut classifier = Classifier::new();
    for chunk in reader.split(b'\n') {
        let chunk = chunk?;
        classifier.feed_chunk(&String::from_utf8_lossy(&chunk));
    }
    Ok(classifier.finish())
}

/// Opens and classifies the report at `path`.
///
/// # Errors
///
/// Returns [`ClassifyError::Io`] if the file cannot be opened or read.
pub fn classify_file(path: &Path) -> Result<Classification, ClassifyError> {
    let io_error = |source| ClassifyError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    debug!("Reading lint report {}", path.display());
    classify_reader(BufReader::new(file)).map_err(io_error)
}
