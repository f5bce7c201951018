// dbgfold - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. The filter run over stdout
// 4. Mapping the outcome to a process exit code

use clap::{Parser, ValueEnum};
use dbgfold::app::run::{filter_file, RunOptions};
use dbgfold::core::filter::{FilterStats, Mode};
use dbgfold::util;
use dbgfold::util::constants::{DEFAULT_MARKER, EXIT_FAILURE, EXIT_OK};
use dbgfold::util::error::FilterError;
use std::io::{self, Write};
use std::path::PathBuf;

/// dbgfold - condense DebugStr test logs.
///
/// Extracts the text after `DebugStr ... text:` from each line, then either
/// folds runs of entries that differ only by their leading index, or prints
/// every entry with blank lines ahead of each `== Section ==` header.
#[derive(Parser, Debug)]
#[command(name = "dbgfold", version, about)]
struct Cli {
    /// Log file to filter.
    logfile: PathBuf,

    /// Output mode.
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = CliMode::Dedup)]
    mode: CliMode,

    /// Token that qualifying lines start with.
    #[arg(long = "marker", default_value = DEFAULT_MARKER)]
    marker: String,

    /// Exit with status 0 even when the log file cannot be opened.
    #[arg(long = "lenient-exit")]
    lenient_exit: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum CliMode {
    /// Fold repeated entries into one line plus a count.
    Dedup,
    /// Print every entry, separating test sections.
    Sections,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Dedup => Mode::Dedup,
            CliMode::Sections => Mode::Sections,
        }
    }
}

fn run(cli: &Cli) -> Result<FilterStats, FilterError> {
    let options = RunOptions {
        mode: cli.mode.into(),
        marker: cli.marker.clone(),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let stats = filter_file(&cli.logfile, &options, &mut out)?;
    out.flush()?;
    Ok(stats)
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    let code = match run(&cli) {
        Ok(_) => EXIT_OK,
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("Output closed early");
            EXIT_OK
        }
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                FilterError::NotFound { .. } | FilterError::Open { .. } if cli.lenient_exit => {
                    EXIT_OK
                }
                _ => EXIT_FAILURE,
            }
        }
    };

    std::process::exit(code);
}
