use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a whole log file from being read.
///
/// Malformed file names and malformed lines are not errors; they show up as
/// `None` or as skipped lines.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
