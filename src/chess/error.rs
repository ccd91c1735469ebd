use std::io;
use std::path::PathBuf;

/// Failures that end a cleaning run.
///
/// Malformed tag lines and unparseable year or rating values are not errors;
/// the parser and the filters absorb them.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("Input path '{}' does not exist", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to scan '{}' for PGN files: {message}", .root.display())]
    ScanFailed { root: PathBuf, message: String },

    #[error("Invalid compression value '{0}'. Supported values: 'zstd' or omitted.")]
    InvalidCompression(String),

    #[error("Failed to write '{}': {source}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = CleanError> = std::result::Result<T, E>;
