// dbgfold - app/run.rs
//
// One filter run over one file: open, scan, report.

use crate::core::extract::PayloadExtractor;
use crate::core::filter::{self, FilterStats, Mode};
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::FilterError;
use std::io::Write;
use std::path::Path;

/// Options for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: Mode,
    /// Token a qualifying line starts with.
    pub marker: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            marker: constants::DEFAULT_MARKER.to_string(),
        }
    }
}

/// Filter the log at `path` into `out`.
///
/// Nothing is written to `out` unless the file opened successfully.
pub fn filter_file<W: Write>(
    path: &Path,
    options: &RunOptions,
    out: &mut W,
) -> Result<FilterStats, FilterError> {
    let extractor = PayloadExtractor::new(&options.marker)?;

    tracing::debug!(
        path = %path.display(),
        mode = options.mode.label(),
        marker = extractor.marker(),
        "Filter run starting"
    );

    let reader = fs::open_log(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "Open failed");
        e
    })?;

    let mut sink = options.mode.sink();
    let stats = filter::run(reader, path, &extractor, sink.as_mut(), out)?;

    tracing::debug!(
        lines_read = stats.lines_read,
        lines_matched = stats.lines_matched,
        entries = stats.entries_emitted,
        "Filter run complete"
    );
    Ok(stats)
}
