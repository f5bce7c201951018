// dbgfold - platform/fs.rs
//
// Opening log files for a streaming, line-oriented scan.

use crate::util::error::FilterError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open a log file for buffered reading.
///
/// A missing file maps to `FilterError::NotFound`; every other failure keeps
/// its `io::Error` as the source. The handle is released when the returned
/// reader is dropped.
pub fn open_log(path: &Path) -> Result<BufReader<File>, FilterError> {
    let file = File::open(path).map_err(|e| FilterError::from_open(path.to_path_buf(), e))?;
    tracing::debug!(path = %path.display(), "Opened log file");
    Ok(BufReader::new(file))
}
