//! Path-related error types.
//!
//! Provides semantic errors for path operations without exposing
//! platform-specific error codes to callers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// An existence probe failed with something other than "not found" or
    /// "permission denied", so the directory chain could not be established.
    #[error("Could not ensure that path {path} exists: {source}")]
    EnsureFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A directory is not writable.
    #[error("Directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },
}

impl PathError {
    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::EnsureFailed { path, .. }
            | Self::NotWritable { path, .. }
            | Self::NotADirectory(path) => path.as_path(),
        }
    }
}
