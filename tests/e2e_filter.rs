// dbgfold - tests/e2e_filter.rs
//
// End-to-end tests for the filter pipeline and the command-line binary.
//
// These exercise real files on disk (checked-in fixture plus tempfile
// scratch files) and, for the CLI tests, the compiled `dbgfold` binary.

use dbgfold::app::run::{filter_file, RunOptions};
use dbgfold::core::filter::Mode;
use dbgfold::util::error::FilterError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn filter_to_string(path: &Path, mode: Mode) -> String {
    let options = RunOptions {
        mode,
        ..Default::default()
    };
    let mut out = Vec::new();
    filter_file(path, &options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn dbgfold(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dbgfold"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch dbgfold")
}

// =============================================================================
// Library pipeline
// =============================================================================

/// The fixture folds the repeated register dumps and keeps everything else.
#[test]
fn e2e_dedup_fixture() {
    let text = filter_to_string(&fixture("cache1_sample.log"), Mode::Dedup);
    let expected = "\
== TestTinyPushbufferDoesNotAutoKickoff ==
Current state: DMA: GET 0x00000000 PUT 0x00000000  CACHE1: GET 0x00000000 PUT 0x00000000
0 DMA: GET 0x00000000 PUT 0x00000010  CACHE1: GET 0x00000000 PUT 0x00000000
  ... <2> identical entries
3 DMA: GET 0x00000010 PUT 0x00000010  CACHE1: GET 0x00000010 PUT 0x00000010
Test completed, sleeping and resetting the pushbuffer pointers
== TestLoopedBatchingWithWaitForIdle ==
0 DMA: GET 0x00000010 PUT 0x00000020  CACHE1: GET 0x00000010 PUT 0x00000010
1 DMA: GET 0x00000020 PUT 0x00000020  CACHE1: GET 0x00000020 PUT 0x00000020
  ... <1> identical entries
State after final sleep
";
    assert_eq!(text, expected);
}

/// Section mode prints all twelve payloads and spaces out both headers.
#[test]
fn e2e_sections_fixture() {
    let text = filter_to_string(&fixture("cache1_sample.log"), Mode::Sections);
    assert!(text.starts_with("\n\n== TestTinyPushbufferDoesNotAutoKickoff ==\n"));
    assert!(text.contains(
        "pushbuffer pointers\n\n\n== TestLoopedBatchingWithWaitForIdle ==\n"
    ));
    let payload_lines = text.lines().filter(|l| !l.is_empty()).count();
    assert_eq!(payload_lines, 12);
}

/// Entries plus reported duplicates account for every matching line.
#[test]
fn e2e_dedup_counts_cover_matching_lines() {
    let options = RunOptions::default();
    let mut out = Vec::new();
    let stats = filter_file(&fixture("cache1_sample.log"), &options, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut covered = 0u64;
    for line in text.lines() {
        match line.strip_prefix("  ... <") {
            Some(rest) => covered += rest.split('>').next().unwrap().parse::<u64>().unwrap(),
            None => covered += 1,
        }
    }
    assert_eq!(stats.lines_read, 14);
    assert_eq!(stats.lines_matched, 12);
    assert_eq!(covered, stats.lines_matched);
}

/// An empty file produces no output in either mode.
#[test]
fn e2e_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.log");
    fs::write(&path, "").unwrap();

    assert!(filter_to_string(&path, Mode::Dedup).is_empty());
    assert!(filter_to_string(&path, Mode::Sections).is_empty());
}

/// A single section-start line is annotated in section mode only.
#[test]
fn e2e_single_section_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.log");
    fs::write(&path, "DebugStr foo text: == INIT ==\n").unwrap();

    assert_eq!(filter_to_string(&path, Mode::Dedup), "== INIT ==\n");
    assert_eq!(filter_to_string(&path, Mode::Sections), "\n\n== INIT ==\n");
}

/// Missing input surfaces as NotFound with nothing written.
#[test]
fn e2e_missing_file_returns_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.log");

    let mut out = Vec::new();
    let result = filter_file(&path, &RunOptions::default(), &mut out);
    assert!(
        matches!(result, Err(FilterError::NotFound { .. })),
        "expected NotFound, got {result:?}"
    );
    assert!(out.is_empty());
}

// =============================================================================
// Command line
// =============================================================================

#[test]
fn cli_dedup_is_default_mode() {
    let output = dbgfold(&[fixture("cache1_sample.log").to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("  ... <2> identical entries\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn cli_sections_mode() {
    let output = dbgfold(&[
        "--mode",
        "sections",
        fixture("cache1_sample.log").to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("\n\n== TestTinyPushbufferDoesNotAutoKickoff ==\n"));
    assert!(!stdout.contains("identical entries"));
}

/// One error line naming the path, no stdout, non-zero exit.
#[test]
fn cli_missing_file_prints_single_error_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.log");
    let path_str = path.to_str().unwrap();

    let output = dbgfold(&[path_str]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "stderr was {stderr:?}");
    assert_eq!(stderr.trim_end(), format!("Error: File '{path_str}' not found."));
}

#[test]
fn cli_lenient_exit_keeps_message_but_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.log");

    let output = dbgfold(&["--lenient-exit", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("missing.log"));
}

/// No positional argument: usage message, exit 2.
#[test]
fn cli_without_arguments_prints_usage() {
    let output = dbgfold(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage:"), "stderr was {stderr:?}");
}
