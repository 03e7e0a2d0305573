//! Result reporting for dispatched operations.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::OpsError;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Severity {
    Information,
    Warning,
    Error,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    /// Create an informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Information,
            message: message.into(),
        }
    }

    /// Create a warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Create an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Convert an operation error into a notice.
    ///
    /// A missing selection is a precondition, reported as a warning with the
    /// bare message; everything else is an error carrying the full text.
    pub fn from_error(err: &OpsError) -> Self {
        if err.is_precondition() {
            Self::warning(err.to_string())
        } else {
            Self::error(format!("Error: {err}"))
        }
    }
}

/// What happened after dispatching an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Message to show.
    pub notice: Notice,
    /// Whether the tree view must be fully reloaded.
    pub reload: bool,
}

impl Outcome {
    /// A successful operation: informational notice and a reload.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            notice: Notice::info(message),
            reload: true,
        }
    }

    /// A failed operation: no reload.
    pub fn failure(err: &OpsError) -> Self {
        Self {
            notice: Notice::from_error(err),
            reload: false,
        }
    }

    /// Check if the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.notice.severity == Severity::Information
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_notice_from_precondition() {
        let notice = Notice::from_error(&OpsError::NoSelection);
        assert_eq!(notice, Notice::warning("No file selected"));
    }

    #[test]
    fn test_notice_from_io_error() {
        let err = OpsError::io(
            "delete",
            PathBuf::from("x"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
        );
        let notice = Notice::from_error(&err);
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "Error: Failed to delete x: Permission denied");
    }

    #[test]
    fn test_outcome_flags() {
        let ok = Outcome::success("Deleted x");
        assert!(ok.is_success());
        assert!(ok.reload);

        let failed = Outcome::failure(&OpsError::NoSelection);
        assert!(!failed.is_success());
        assert!(!failed.reload);
    }
}
