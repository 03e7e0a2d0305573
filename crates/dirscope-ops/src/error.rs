//! Error type for file operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by file operations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// An operation that needs a selection was invoked without one.
    #[error("No file selected")]
    NoSelection,

    /// The computed target path is already taken.
    #[error("Target already exists: {}", path.display())]
    TargetExists { path: PathBuf },

    /// The path has no final component to derive a target name from.
    #[error("Cannot derive a target name from {}", path.display())]
    NoFileName { path: PathBuf },

    /// A filesystem call failed.
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OpsError {
    /// Create an I/O error with the action and path that failed.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Check whether this is a precondition failure rather than a filesystem one.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NoSelection)
    }
}

/// Result alias for file operations.
pub type OpsResult<T> = Result<T, OpsError>;
