//! Delete operation.

use std::fs;
use std::path::Path;

use crate::error::{OpsError, OpsResult};

/// Delete `path`, recursing into directories.
///
/// Symlinks are removed themselves; their targets are never touched.
pub fn delete_entry(path: &Path) -> OpsResult<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| OpsError::io("delete", path, e))?;

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    result.map_err(|e| OpsError::io("delete", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"x").unwrap();

        delete_entry(&file).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn test_delete_directory_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("d");
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::write(root.join("a/b/c/leaf"), b"x").unwrap();

        delete_entry(&root).unwrap();
        assert!(!root.exists());
        assert!(!root.join("a/b/c/leaf").exists());
    }

    #[test]
    fn test_delete_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = delete_entry(&dir.path().join("ghost.txt")).unwrap_err();
        assert!(matches!(err, OpsError::Io { action: "delete", .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_symlink_keeps_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target_dir");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), b"x").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        delete_entry(&link).unwrap();
        assert!(fs::symlink_metadata(&link).is_err());
        assert!(target.join("keep").exists());
    }
}
