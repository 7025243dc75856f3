//! CLI-specific error types and mappings.
//!
//! Maps [`PathError`] onto exit codes and user-facing messages.

use framepaths_core::PathError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A directory could not be ensured or is unusable.
    #[error("{0}")]
    Path(String),

    /// A directory exists but rejects writes.
    #[error("Not writable: {0}")]
    NotWritable(String),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Path(_) | Self::Serialization(_) => 1,
            Self::NotWritable(_) => 73, // EX_CANTCREAT
            Self::Io(_) => 74,          // EX_IOERR
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::NotWritable { .. } => Self::NotWritable(err.to_string()),
            PathError::EnsureFailed { .. } | PathError::NotADirectory(_) => {
                Self::Path(err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
