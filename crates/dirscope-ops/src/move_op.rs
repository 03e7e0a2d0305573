//! Move operation.

use std::fs;
use std::path::Path;

use crate::copy::copy_entry;
use crate::delete::delete_entry;
use crate::error::{OpsError, OpsResult};

/// Move `source` to `dest`.
///
/// Tries a rename first. When that fails because the two paths live on
/// different filesystems, falls back to copy followed by removal of the
/// source.
pub fn move_entry(source: &Path, dest: &Path) -> OpsResult<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::CrossesDevices => {
            tracing::debug!(
                source = %source.display(),
                dest = %dest.display(),
                "rename crosses devices, copying instead"
            );
            copy_then_remove(source, dest)
        }
        Err(e) => Err(OpsError::io("move", source, e)),
    }
}

/// A symlink source is recreated at `dest`, matching what a rename would do.
fn copy_then_remove(source: &Path, dest: &Path) -> OpsResult<()> {
    copy_entry(source, dest)?;
    delete_entry(source)
}
