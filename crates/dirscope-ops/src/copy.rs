//! Copy operation.

use std::fs;
use std::path::Path;

use crate::error::{OpsError, OpsResult};

/// Copy `source` to `dest`, recursing into directories.
///
/// Symlinks are recreated rather than followed, both for `source` itself and
/// anywhere inside a copied directory. Returns the number of file bytes
/// copied. A failure partway through a directory leaves whatever was already
/// copied in place.
pub fn copy_entry(source: &Path, dest: &Path) -> OpsResult<u64> {
    let file_type = fs::symlink_metadata(source)
        .map_err(|e| OpsError::io("copy", source, e))?
        .file_type();
    copy_typed(source, dest, file_type)
}

fn copy_typed(source: &Path, dest: &Path, file_type: fs::FileType) -> OpsResult<u64> {
    if file_type.is_symlink() {
        copy_symlink(source, dest)
    } else if file_type.is_dir() {
        copy_dir_recursive(source, dest)
    } else {
        copy_file(source, dest)
    }
}

/// Copy a single file.
fn copy_file(source: &Path, dest: &Path) -> OpsResult<u64> {
    fs::copy(source, dest).map_err(|e| OpsError::io("copy", source, e))
}

/// Recreate the link at `source` as `dest`, pointing at the same target.
#[cfg(unix)]
fn copy_symlink(source: &Path, dest: &Path) -> OpsResult<u64> {
    let target = fs::read_link(source).map_err(|e| OpsError::io("read link", source, e))?;
    std::os::unix::fs::symlink(&target, dest).map_err(|e| OpsError::io("copy", source, e))?;
    Ok(0)
}

/// Without portable symlink creation, copy what the link points at.
#[cfg(not(unix))]
fn copy_symlink(source: &Path, dest: &Path) -> OpsResult<u64> {
    let metadata = fs::metadata(source).map_err(|e| OpsError::io("copy", source, e))?;
    if metadata.is_dir() {
        copy_dir_recursive(source, dest)
    } else {
        copy_file(source, dest)
    }
}

/// Recursively copy a directory.
fn copy_dir_recursive(source: &Path, dest: &Path) -> OpsResult<u64> {
    fs::create_dir(dest).map_err(|e| OpsError::io("create directory", dest, e))?;

    let mut total_bytes = 0u64;

    let entries = fs::read_dir(source).map_err(|e| OpsError::io("read directory", source, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| OpsError::io("read directory", source, e))?;
        let path = entry.path();
        let dest_path = dest.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| OpsError::io("read directory", &path, e))?;

        total_bytes += copy_typed(&path, &dest_path, file_type)?;
    }

    Ok(total_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dst = dir.path().join("a.txt_copy");
        fs::write(&src, b"hello").unwrap();

        let bytes = copy_entry(&src, &dst).unwrap();
        assert_eq!(bytes, 5);
        assert_eq!(fs::read(&dst).unwrap(), b"hello");
        assert_eq!(fs::read(&src).unwrap(), b"hello");
    }

    #[test]
    fn test_copy_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("tree");
        fs::create_dir_all(src.join("a/b")).unwrap();
        fs::write(src.join("top.txt"), b"1").unwrap();
        fs::write(src.join("a/b/deep.txt"), b"22").unwrap();

        let dst = dir.path().join("tree_copy");
        let bytes = copy_entry(&src, &dst).unwrap();

        assert_eq!(bytes, 3);
        assert_eq!(fs::read(dst.join("top.txt")).unwrap(), b"1");
        assert_eq!(fs::read(dst.join("a/b/deep.txt")).unwrap(), b"22");
        assert!(src.join("a/b/deep.txt").exists());
    }

    #[test]
    fn test_copy_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_entry(&dir.path().join("ghost"), &dir.path().join("ghost_copy"))
            .unwrap_err();
        assert!(matches!(err, OpsError::Io { action: "copy", .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_keeps_links_inside_directory() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("d");
        fs::create_dir_all(src.join("sub")).unwrap();
        fs::write(src.join("sub/x.txt"), b"x").unwrap();
        symlink("sub", src.join("to_sub")).unwrap();
        symlink("nowhere", src.join("dangling")).unwrap();
        symlink(".", src.join("self")).unwrap();

        let dst = dir.path().join("d_copy");
        let bytes = copy_entry(&src, &dst).unwrap();

        assert_eq!(bytes, 1);
        for name in ["to_sub", "dangling", "self"] {
            let link = dst.join(name);
            assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
            assert_eq!(fs::read_link(&link).unwrap(), fs::read_link(src.join(name)).unwrap());
        }
        assert_eq!(fs::read(dst.join("sub/x.txt")).unwrap(), b"x");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_link_itself() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink("missing", &link).unwrap();

        let dst = dir.path().join("link_copy");
        assert_eq!(copy_entry(&link, &dst).unwrap(), 0);
        assert_eq!(fs::read_link(&dst).unwrap(), Path::new("missing"));
    }
}
