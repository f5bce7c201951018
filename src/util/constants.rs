// dbgfold - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "dbgfold";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Line matching
// =============================================================================

/// Token a debug-print line starts with.
pub const DEFAULT_MARKER: &str = "DebugStr";

/// Literal delimiter that precedes the payload. At least one whitespace
/// character must follow it.
pub const PAYLOAD_DELIMITER: &str = "text:";

/// Two-character fence around a test section name (`== Name ==`).
pub const SECTION_FENCE: &str = "==";

/// Blank lines printed ahead of a section-start payload.
pub const SECTION_BLANK_LINES: usize = 2;

// =============================================================================
// Output
// =============================================================================

/// Indent in front of the suppressed-duplicates line.
pub const DUPLICATE_LINE_INDENT: &str = "  ";

// =============================================================================
// Exit codes
// =============================================================================

/// Run completed.
pub const EXIT_OK: i32 = 0;

/// Input could not be opened or read, or output failed.
pub const EXIT_FAILURE: i32 = 1;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is given.
/// Kept at warn so stderr only carries real failures.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
