// dbgfold - core/sections.rs
//
// Passthrough that sets each test section apart with blank lines.

use crate::core::extract::is_section_start;
use crate::core::filter::PayloadSink;
use crate::util::constants;
use std::io::{self, Write};

/// Prints every payload as-is, preceded by blank lines when it opens a
/// new `== Name ==` section.
#[derive(Debug, Default)]
pub struct SectionAnnotator {
    sections_seen: u64,
}

impl SectionAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of section-start payloads seen so far.
    pub fn sections_seen(&self) -> u64 {
        self.sections_seen
    }
}

impl PayloadSink for SectionAnnotator {
    fn accept(&mut self, payload: &str, out: &mut dyn Write) -> io::Result<usize> {
        if is_section_start(payload) {
            self.sections_seen += 1;
            for _ in 0..constants::SECTION_BLANK_LINES {
                writeln!(out)?;
            }
        }
        writeln!(out, "{payload}")?;
        Ok(1)
    }

    fn finish(&mut self, _out: &mut dyn Write) -> io::Result<usize> {
        tracing::debug!(sections = self.sections_seen, "Section pass complete");
        Ok(0)
    }
}
