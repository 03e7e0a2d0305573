//! File and directory creation operations.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{OpsError, OpsResult};

/// Create a single directory. Fails if anything already exists at `path`.
pub fn create_directory(path: &Path) -> OpsResult<()> {
    fs::create_dir(path).map_err(|e| creation_error("create directory", path, e))
}

/// Create an empty file. Fails if anything already exists at `path`; an
/// existing file is never truncated.
pub fn create_file(path: &Path) -> OpsResult<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
        .map_err(|e| creation_error("create file", path, e))
}

fn creation_error(action: &'static str, path: &Path, source: std::io::Error) -> OpsError {
    if source.kind() == ErrorKind::AlreadyExists {
        OpsError::TargetExists {
            path: path.to_path_buf(),
        }
    } else {
        OpsError::io(action, path, source)
    }
}
