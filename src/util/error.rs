// dbgfold - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant that wraps an I/O failure keeps it reachable via source().

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that terminate a filter run.
#[derive(Debug)]
pub enum FilterError {
    /// The input path does not exist.
    NotFound { path: PathBuf },

    /// The input exists but could not be opened (permissions, directory, ...).
    Open { path: PathBuf, source: io::Error },

    /// Reading the input failed part-way through the scan.
    Read {
        path: PathBuf,
        line_number: u64,
        source: io::Error,
    },

    /// Writing to the output stream failed.
    Write { source: io::Error },

    /// The marker token could not be turned into a line pattern.
    InvalidMarker {
        marker: String,
        source: regex::Error,
    },
}

impl FilterError {
    /// Classify a failed `File::open`, splitting out the not-found case so the
    /// message matches what users of the filter expect to see.
    pub fn from_open(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Open { path, source }
        }
    }

    /// True when the downstream reader went away (e.g. `dbgfold log | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write { source } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "File '{}' not found.", path.display())
            }
            Self::Open { path, source } => {
                write!(f, "Cannot open '{}': {source}", path.display())
            }
            Self::Read {
                path,
                line_number,
                source,
            } => write!(
                f,
                "'{}' line {line_number}: read failed: {source}",
                path.display()
            ),
            Self::Write { source } => write!(f, "Failed to write output: {source}"),
            Self::InvalidMarker { marker, source } => {
                write!(f, "Cannot build line pattern for marker '{marker}': {source}")
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Open { source, .. } => Some(source),
            Self::Read { source, .. } => Some(source),
            Self::Write { source } => Some(source),
            Self::InvalidMarker { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for FilterError {
    /// Bare I/O errors inside the core only come from the output writer;
    /// input errors are always wrapped with their path first.
    fn from(source: io::Error) -> Self {
        Self::Write { source }
    }
}
