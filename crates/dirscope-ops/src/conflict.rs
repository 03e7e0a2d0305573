//! Target naming and collision detection for copy and move.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OpsError, OpsResult};

/// Build the sibling target for `source` by appending `suffix` to its name.
///
/// `notes.txt` with `_copy` becomes `notes.txt_copy` in the same directory.
/// Paths without a final component (`/`, `..`) have no sibling name.
pub fn sibling_target(source: &Path, suffix: &str) -> OpsResult<PathBuf> {
    let name = source.file_name().ok_or_else(|| OpsError::NoFileName {
        path: source.to_path_buf(),
    })?;

    let mut new_name = name.to_os_string();
    new_name.push(suffix);

    Ok(source.with_file_name(new_name))
}

/// Check whether anything, including a dangling symlink, occupies `path`.
pub fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Fail with [`OpsError::TargetExists`] if `target` is occupied.
pub fn ensure_vacant(target: &Path) -> OpsResult<()> {
    if is_occupied(target) {
        return Err(OpsError::TargetExists {
            path: target.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_target_appends_to_full_name() {
        let target = sibling_target(Path::new("/tmp/test.txt"), "_copy").unwrap();
        assert_eq!(target, PathBuf::from("/tmp/test.txt_copy"));
    }

    #[test]
    fn test_sibling_target_relative() {
        let target = sibling_target(Path::new("docs"), "_moved").unwrap();
        assert_eq!(target, PathBuf::from("docs_moved"));

        let target = sibling_target(Path::new("./a/b"), "_copy").unwrap();
        assert_eq!(target, PathBuf::from("./a/b_copy"));
    }

    #[test]
    fn test_sibling_target_trailing_slash() {
        let target = sibling_target(Path::new("/tmp/dir/"), "_copy").unwrap();
        assert_eq!(target, PathBuf::from("/tmp/dir_copy"));
    }

    #[test]
    fn test_sibling_target_without_name() {
        assert!(matches!(
            sibling_target(Path::new("/"), "_copy"),
            Err(OpsError::NoFileName { .. })
        ));
        assert!(matches!(
            sibling_target(Path::new(".."), "_copy"),
            Err(OpsError::NoFileName { .. })
        ));
    }

    #[test]
    fn test_ensure_vacant() {
        let dir = tempfile::tempdir().unwrap();
        let taken = dir.path().join("taken");
        std::fs::write(&taken, b"x").unwrap();

        assert!(matches!(
            ensure_vacant(&taken),
            Err(OpsError::TargetExists { .. })
        ));
        assert!(ensure_vacant(&dir.path().join("free")).is_ok());
    }
}
