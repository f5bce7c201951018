// dbgfold - core/extract.rs
//
// Shared line-matching primitive used by every output mode:
// marker match, payload extraction, index stripping, section detection.
// Core layer: pure string logic, no I/O.

use crate::util::constants;
use crate::util::error::FilterError;
use regex::Regex;
use std::sync::OnceLock;

/// Pulls the payload out of `<marker> ... text: <payload>` lines.
#[derive(Debug, Clone)]
pub struct PayloadExtractor {
    marker: String,
    line_pattern: Regex,
}

impl PayloadExtractor {
    /// Build an extractor for lines starting with `marker`.
    ///
    /// The marker is matched literally and case-sensitively. The delimiter
    /// is searched lazily, so the first `text:` followed by whitespace wins.
    pub fn new(marker: &str) -> Result<Self, FilterError> {
        let pattern = format!(
            r"^{}.*?{}\s+(?P<payload>.*)$",
            regex::escape(marker),
            regex::escape(constants::PAYLOAD_DELIMITER)
        );
        let line_pattern = Regex::new(&pattern).map_err(|e| FilterError::InvalidMarker {
            marker: marker.to_string(),
            source: e,
        })?;
        Ok(Self {
            marker: marker.to_string(),
            line_pattern,
        })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Return the trimmed payload of a qualifying line, or `None` if the line
    /// does not carry one.
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        let line = line.trim();
        self.line_pattern
            .captures(line)
            .and_then(|caps| caps.name("payload"))
            .map(|m| m.as_str())
    }
}

/// Comparison key for a payload: everything after a leading numeric index
/// and its whitespace, or the whole payload when there is no index.
///
/// The returned slice is always a suffix of `payload`.
pub fn derive_key(payload: &str) -> &str {
    static INDEX: OnceLock<Regex> = OnceLock::new();
    let index = INDEX.get_or_init(|| {
        Regex::new(r"^\d+\s+(?P<rest>.*)$").expect("derive_key: invalid regex")
    });

    index
        .captures(payload)
        .and_then(|caps| caps.name("rest"))
        .map_or(payload, |m| m.as_str())
}

/// True when the payload opens a new test section (`== Name ==`).
pub fn is_section_start(payload: &str) -> bool {
    static SECTION: OnceLock<Regex> = OnceLock::new();
    let section = SECTION.get_or_init(|| {
        let fence = regex::escape(constants::SECTION_FENCE);
        Regex::new(&format!(r"^{fence}\s*\w+\s*{fence}"))
            .expect("is_section_start: invalid regex")
    });

    section.is_match(payload)
}
