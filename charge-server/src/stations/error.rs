//! Station source error types.

use std::path::PathBuf;

/// Errors that can occur when loading station records.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The station file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The station file is not a JSON array of station records
    #[error("failed to parse {}: {message}", .path.display())]
    Json { path: PathBuf, message: String },

    /// Reload requested on a store that was not loaded from a file
    #[error("station store has no backing file to reload from")]
    NoSource,
}
