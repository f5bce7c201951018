// dbgfold - core/dedup.rs
//
// Run-length folding of consecutive payloads that differ only in their
// leading index. Only the first payload of a run is printed, followed by a
// count of the suppressed ones.

use crate::core::extract::derive_key;
use crate::core::filter::PayloadSink;
use crate::util::constants;
use std::io::{self, Write};

/// The run currently held back from output.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BufferedRun {
    /// Payload of the first line of the run, index included.
    payload: String,
    /// Byte offset where the comparison key starts inside `payload`.
    key_start: usize,
    /// Lines after the first that shared its key.
    duplicates: u64,
}

impl BufferedRun {
    fn new(payload: &str) -> Self {
        let key = derive_key(payload);
        Self {
            payload: payload.to_string(),
            key_start: payload.len() - key.len(),
            duplicates: 0,
        }
    }

    fn key(&self) -> &str {
        &self.payload[self.key_start..]
    }
}

/// Folds runs of equal keys into one entry plus a duplicate count.
#[derive(Debug, Default)]
pub struct RunCollapser {
    buffered: Option<BufferedRun>,
}

impl RunCollapser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write out the buffered run, if any, and clear the buffer.
    ///
    /// Returns the number of entries written (0 or 1).
    pub fn flush(&mut self, out: &mut dyn Write) -> io::Result<usize> {
        let Some(run) = self.buffered.take() else {
            return Ok(0);
        };

        writeln!(out, "{}", run.payload)?;
        if run.duplicates > 0 {
            writeln!(
                out,
                "{}... <{}> identical entries",
                constants::DUPLICATE_LINE_INDENT,
                run.duplicates
            )?;
        }
        Ok(1)
    }
}

impl PayloadSink for RunCollapser {
    fn accept(&mut self, payload: &str, out: &mut dyn Write) -> io::Result<usize> {
        if let Some(run) = self.buffered.as_mut() {
            if run.key() == derive_key(payload) {
                run.duplicates += 1;
                return Ok(0);
            }
        }

        let written = self.flush(out)?;
        self.buffered = Some(BufferedRun::new(payload));
        Ok(written)
    }

    fn finish(&mut self, out: &mut dyn Write) -> io::Result<usize> {
        self.flush(out)
    }
}
