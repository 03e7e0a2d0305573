//! The single active selection.

use std::path::{Path, PathBuf};

use crate::info::EntryKind;

/// Holds at most one selected path.
///
/// Selecting never validates the path: a stale or deleted path is recorded
/// as-is and only discovered when something inspects or operates on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    path: Option<PathBuf>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` as the current selection, replacing any previous one.
    pub fn select(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Remove the current selection.
    pub fn clear(&mut self) {
        self.path = None;
    }

    /// The selected path, if any.
    pub fn current(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Return the selected path and clear the selection.
    pub fn take(&mut self) -> Option<PathBuf> {
        self.path.take()
    }

    /// Check whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.path.is_none()
    }

    /// Check whether `path` is the selected path.
    pub fn is_selected(&self, path: &Path) -> bool {
        self.path.as_deref() == Some(path)
    }

    /// Kind of the selected entry, computed from the filesystem.
    ///
    /// Returns `None` when nothing is selected or the path no longer exists.
    pub fn kind(&self) -> Option<EntryKind> {
        self.current().and_then(EntryKind::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_overwrites() {
        let mut selection = Selection::new();
        assert!(selection.is_empty());

        selection.select("a.txt");
        selection.select("b.txt");
        assert_eq!(selection.current(), Some(Path::new("b.txt")));
        assert!(selection.is_selected(Path::new("b.txt")));
        assert!(!selection.is_selected(Path::new("a.txt")));
    }

    #[test]
    fn test_clear_and_take() {
        let mut selection = Selection::new();
        selection.select("/tmp/x");
        assert_eq!(selection.take(), Some(PathBuf::from("/tmp/x")));
        assert!(selection.is_empty());
        assert_eq!(selection.take(), None);

        selection.select("/tmp/y");
        selection.clear();
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_stale_path_is_recorded() {
        let mut selection = Selection::new();
        selection.select("./ghost.txt-that-does-not-exist");
        assert!(!selection.is_empty());
        assert_eq!(selection.kind(), None);
    }

    #[test]
    fn test_kind_is_derived() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.txt");
        std::fs::write(&file, b"hi").unwrap();

        let mut selection = Selection::new();
        selection.select(dir.path());
        assert_eq!(selection.kind(), Some(EntryKind::Directory));

        selection.select(&file);
        assert_eq!(selection.kind(), Some(EntryKind::File));

        std::fs::remove_file(&file).unwrap();
        assert_eq!(selection.kind(), None);
    }
}
