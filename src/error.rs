//! Error types for Stamp
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stamp operations
pub type StampResult<T> = Result<T, StampError>;

/// Main error type for Stamp operations
#[derive(Error, Debug)]
pub enum StampError {
    /// Asset was presented as a stream instead of fully buffered bytes
    #[error("streaming input not supported for '{path}' - asset content must be fully buffered")]
    UnsupportedInput { path: PathBuf },

    /// Prior manifest exists but could not be read or parsed
    #[error("failed to load manifest {path}: {message}")]
    ManifestLoad { path: PathBuf, message: String },

    /// Merged manifest could not be persisted
    #[error("failed to write manifest {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Invalid `.stampignore` pattern file
    #[error("invalid ignore file {file}: {message}")]
    InvalidIgnoreFile { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
