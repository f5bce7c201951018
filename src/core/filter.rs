// dbgfold - core/filter.rs
//
// Single-pass driver: reads lines, extracts payloads, hands them to the
// selected output strategy.
// Core layer: accepts BufRead/Write trait objects, never touches the
// filesystem directly.

use crate::core::dedup::RunCollapser;
use crate::core::extract::PayloadExtractor;
use crate::core::sections::SectionAnnotator;
use crate::util::error::FilterError;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// An output strategy fed one payload at a time, in input order.
pub trait PayloadSink {
    /// Consume one payload. Returns the number of entries written.
    fn accept(&mut self, payload: &str, out: &mut dyn Write) -> io::Result<usize>;

    /// Called once after the last payload. Returns the number of entries
    /// written.
    fn finish(&mut self, out: &mut dyn Write) -> io::Result<usize>;
}

/// Output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Fold consecutive payloads that differ only by their index.
    #[default]
    Dedup,
    /// Print every payload, separating test sections with blank lines.
    Sections,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dedup => "dedup",
            Self::Sections => "sections",
        }
    }

    /// Fresh strategy for one run in this mode.
    pub fn sink(self) -> Box<dyn PayloadSink> {
        match self {
            Self::Dedup => Box::new(RunCollapser::new()),
            Self::Sections => Box::new(SectionAnnotator::new()),
        }
    }
}

/// Counters for one filter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Physical lines read from the input.
    pub lines_read: u64,
    /// Lines that carried a payload.
    pub lines_matched: u64,
    /// Payload entries written (count lines and blank separators excluded).
    pub entries_emitted: u64,
}

/// Run `reader` through `extractor` into `sink`, writing to `out`.
///
/// `source` only labels read errors. Lines are decoded lossily, so invalid
/// UTF-8 never aborts the scan.
pub fn run<R: BufRead, W: Write>(
    mut reader: R,
    source: &Path,
    extractor: &PayloadExtractor,
    sink: &mut dyn PayloadSink,
    out: &mut W,
) -> Result<FilterStats, FilterError> {
    let mut stats = FilterStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| FilterError::Read {
                path: source.to_path_buf(),
                line_number: stats.lines_read + 1,
                source: e,
            })?;
        if read == 0 {
            break;
        }
        stats.lines_read += 1;

        let line: Cow<'_, str> = String::from_utf8_lossy(&buf);
        let Some(payload) = extractor.extract(&line) else {
            continue;
        };
        stats.lines_matched += 1;
        stats.entries_emitted += sink.accept(payload, out)? as u64;
    }

    stats.entries_emitted += sink.finish(out)? as u64;
    Ok(stats)
}
