//! Maps a requested operation and the current selection to a filesystem
//! mutation and a single reported outcome.

use std::path::{Path, PathBuf};

use dirscope_core::Selection;

use crate::conflict::{ensure_vacant, sibling_target};
use crate::copy::copy_entry;
use crate::create::{create_directory, create_file};
use crate::delete::delete_entry;
use crate::error::{OpsError, OpsResult};
use crate::move_op::move_entry;
use crate::operation::{COPY_SUFFIX, FileOperation, MOVE_SUFFIX, NEW_DIRECTORY_NAME, NEW_FILE_NAME};
use crate::outcome::Outcome;

/// Runs file operations against a selection or a working directory.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    workdir: PathBuf,
}

impl Dispatcher {
    /// Create a dispatcher whose create operations act on `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Directory that create operations act on.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run `op` and report the outcome.
    ///
    /// Copy, move and delete consume the selection: it is cleared whether the
    /// operation succeeds or fails. Without a selection they report a
    /// warning and change nothing. Create operations leave the selection
    /// alone.
    pub fn dispatch(&self, op: FileOperation, selection: &mut Selection) -> Outcome {
        let result = match op {
            FileOperation::Copy => with_selection(selection, |path| {
                transfer(path, COPY_SUFFIX, copy_entry).map(|target| {
                    format!("Copied {} to {}", path.display(), target.display())
                })
            }),
            FileOperation::Move => with_selection(selection, |path| {
                transfer(path, MOVE_SUFFIX, move_entry).map(|target| {
                    format!("Moved {} to {}", path.display(), target.display())
                })
            }),
            FileOperation::Delete => with_selection(selection, |path| {
                delete_entry(path).map(|()| format!("Deleted {}", path.display()))
            }),
            FileOperation::CreateDirectory => {
                let path = self.workdir.join(NEW_DIRECTORY_NAME);
                create_directory(&path).map(|()| format!("Created directory {}", path.display()))
            }
            FileOperation::CreateFile => {
                let path = self.workdir.join(NEW_FILE_NAME);
                create_file(&path).map(|()| format!("Created file {}", path.display()))
            }
        };

        match result {
            Ok(message) => {
                tracing::info!(operation = %op, "{message}");
                Outcome::success(message)
            }
            Err(err) => {
                tracing::warn!(operation = %op, error = %err, "operation failed");
                Outcome::failure(&err)
            }
        }
    }
}

/// Take the selection and run `f` on it, or fail with `NoSelection`.
fn with_selection(
    selection: &mut Selection,
    f: impl FnOnce(&Path) -> OpsResult<String>,
) -> OpsResult<String> {
    let path = selection.take().ok_or(OpsError::NoSelection)?;
    f(&path)
}

/// Copy or move `source` to its suffixed sibling, refusing to overwrite.
fn transfer<T>(
    source: &Path,
    suffix: &str,
    op: impl FnOnce(&Path, &Path) -> OpsResult<T>,
) -> OpsResult<PathBuf> {
    let target = sibling_target(source, suffix)?;
    ensure_vacant(&target)?;
    op(source, &target)?;
    Ok(target)
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Severity;

    #[test]
    fn test_no_selection_is_warning() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = Dispatcher::new(dir.path());
        let mut selection = Selection::new();

        for op in [FileOperation::Copy, FileOperation::Move, FileOperation::Delete] {
            let outcome = dispatcher.dispatch(op, &mut selection);
            assert_eq!(outcome.notice.severity, Severity::Warning);
            assert_eq!(outcome.notice.message, "No file selected");
            assert!(!outcome.reload);
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_create_leaves_selection() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = Dispatcher::new(dir.path());
        let mut selection = Selection::new();
        selection.select(dir.path().join("whatever"));

        let outcome = dispatcher.dispatch(FileOperation::CreateFile, &mut selection);
        assert!(outcome.is_success());
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_workdir() {
        assert_eq!(Dispatcher::default().workdir(), Path::new("."));
    }
}
