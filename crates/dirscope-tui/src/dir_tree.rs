//! Lazily loaded directory tree backing the tree view.
//!
//! Children of a directory are read the first time it is expanded. A reload
//! throws the whole tree away and reads it again from disk, re-expanding
//! whatever was expanded before and still exists.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use dirscope_core::display_name;

use crate::ui::TreeState;

/// Type of a node in the directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File { executable: bool },
    /// Symlinks are leaves; they are never expanded.
    Symlink { broken: bool },
    Other,
}

/// A single entry in the directory tree.
#[derive(Debug, Clone)]
pub struct DirNode {
    /// Full path (root path joined with names).
    pub path: PathBuf,
    /// Display name.
    pub name: String,
    /// Node type.
    pub kind: NodeKind,
    /// File size in bytes (0 for directories and symlinks).
    pub size: u64,
    /// Loaded children, `None` until the directory is first expanded.
    pub children: Option<Vec<DirNode>>,
    /// Set when reading this directory failed.
    pub unreadable: bool,
}

impl DirNode {
    fn root(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            name: path.display().to_string(),
            kind: NodeKind::Directory,
            size: 0,
            children: None,
            unreadable: false,
        }
    }

    fn from_entry(path: PathBuf) -> Option<Self> {
        let link_meta = fs::symlink_metadata(&path).ok()?;
        let file_type = link_meta.file_type();

        let (kind, size) = if file_type.is_symlink() {
            let broken = fs::metadata(&path).is_err();
            (NodeKind::Symlink { broken }, 0)
        } else if file_type.is_dir() {
            (NodeKind::Directory, 0)
        } else if file_type.is_file() {
            (
                NodeKind::File {
                    executable: is_executable(&link_meta),
                },
                link_meta.len(),
            )
        } else {
            (NodeKind::Other, 0)
        };

        Some(Self {
            name: display_name(&path),
            path,
            kind,
            size,
            children: None,
            unreadable: false,
        })
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Read children from disk if they have not been loaded yet.
    fn ensure_loaded(&mut self, show_hidden: bool) {
        if self.children.is_some() || !self.is_dir() {
            return;
        }

        match read_children(&self.path, show_hidden) {
            Ok(children) => {
                self.children = Some(children);
                self.unreadable = false;
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read directory");
                self.children = Some(Vec::new());
                self.unreadable = true;
            }
        }
    }
}

/// Read and sort the entries of a directory: directories first, then by
/// case-insensitive name.
fn read_children(dir: &Path, show_hidden: bool) -> std::io::Result<Vec<DirNode>> {
    let mut children: Vec<DirNode> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| show_hidden || !entry.file_name().to_string_lossy().starts_with('.'))
        .filter_map(|entry| DirNode::from_entry(entry.path()))
        .collect();

    children.sort_by(compare_nodes);
    Ok(children)
}

fn compare_nodes(a: &DirNode, b: &DirNode) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    false
}

/// A flattened visible row of the tree.
#[derive(Debug, Clone)]
pub struct VisibleItem {
    pub path: PathBuf,
    pub name: String,
    pub kind: NodeKind,
    pub size: u64,
    pub expanded: bool,
    pub unreadable: bool,
    pub depth: usize,
    pub is_last_sibling: bool,
    pub parent_last_siblings: Vec<bool>,
}

/// The directory tree rooted at the explorer root.
#[derive(Debug, Clone)]
pub struct DirTree {
    root: DirNode,
    show_hidden: bool,
}

impl DirTree {
    /// Create a tree for `root` with the root directory loaded.
    pub fn new(root: impl AsRef<Path>, show_hidden: bool) -> Self {
        let mut root = DirNode::root(root.as_ref());
        root.ensure_loaded(show_hidden);
        Self { root, show_hidden }
    }

    /// Path of the root node.
    pub fn root_path(&self) -> &Path {
        &self.root.path
    }

    /// The root node.
    pub fn root(&self) -> &DirNode {
        &self.root
    }

    /// Find a loaded node by path.
    pub fn node(&self, path: &Path) -> Option<&DirNode> {
        let rel = path.strip_prefix(&self.root.path).ok()?;
        let mut node = &self.root;
        for name in normal_components(rel) {
            node = node
                .children
                .as_ref()?
                .iter()
                .find(|child| child.path.file_name() == Some(name))?;
        }
        Some(node)
    }

    /// Load `path` and every directory on the way to it. Returns the node if
    /// it exists below the root.
    fn load_path(&mut self, path: &Path) -> Option<&mut DirNode> {
        let rel = path.strip_prefix(&self.root.path).ok()?.to_path_buf();
        let show_hidden = self.show_hidden;

        let mut node = &mut self.root;
        node.ensure_loaded(show_hidden);
        for name in normal_components(&rel) {
            node = node
                .children
                .as_mut()?
                .iter_mut()
                .find(|child| child.path.file_name() == Some(name))?;
            node.ensure_loaded(show_hidden);
        }
        Some(node)
    }

    /// Expand a directory, reading its children if needed.
    pub fn expand(&mut self, path: &Path, state: &mut TreeState) {
        if self.load_path(path).is_some_and(|node| node.is_dir()) {
            state.expand(path);
        }
    }

    /// Collapse a directory. Its loaded children are kept.
    pub fn collapse(&mut self, path: &Path, state: &mut TreeState) {
        state.collapse(path);
    }

    /// Toggle a directory between expanded and collapsed.
    pub fn toggle(&mut self, path: &Path, state: &mut TreeState) {
        if state.is_expanded(path) {
            self.collapse(path, state);
        } else {
            self.expand(path, state);
        }
    }

    /// Re-read the whole tree from disk.
    ///
    /// Directories that were expanded and still exist stay expanded; the
    /// cursor stays on the same path when it still exists, otherwise it is
    /// clamped to the new length.
    pub fn reload(&mut self, state: &mut TreeState) {
        let cursor_path = self
            .flatten(state)
            .get(state.selected)
            .map(|item| item.path.clone());

        let mut root = DirNode::root(&self.root.path);
        root.ensure_loaded(self.show_hidden);
        self.root = root;

        let mut expanded: Vec<PathBuf> = state.expanded.iter().cloned().collect();
        expanded.sort_by_key(|p| p.components().count());

        let mut still_expanded = HashSet::new();
        for path in expanded {
            if self.load_path(&path).is_some_and(|node| node.is_dir()) {
                still_expanded.insert(path);
            }
        }
        state.expanded = still_expanded;

        let items = self.flatten(state);
        state.selected = cursor_path
            .and_then(|path| items.iter().position(|item| item.path == path))
            .unwrap_or_else(|| state.selected.min(items.len().saturating_sub(1)));

        tracing::debug!(root = %self.root.path.display(), rows = items.len(), "tree reloaded");
    }

    /// Flatten the tree into visible rows based on expansion state.
    pub fn flatten(&self, state: &TreeState) -> Vec<VisibleItem> {
        let mut items = Vec::new();
        flatten_node(&self.root, 0, true, Vec::new(), state, &mut items);
        items
    }

    /// Whether hidden entries are listed.
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }
}

fn normal_components(path: &Path) -> impl Iterator<Item = &std::ffi::OsStr> {
    path.components().filter_map(|c| match c {
        Component::Normal(name) => Some(name),
        _ => None,
    })
}

fn flatten_node(
    node: &DirNode,
    depth: usize,
    is_last: bool,
    parent_last_siblings: Vec<bool>,
    state: &TreeState,
    items: &mut Vec<VisibleItem>,
) {
    let expanded = node.is_dir() && state.is_expanded(&node.path);

    items.push(VisibleItem {
        path: node.path.clone(),
        name: node.name.clone(),
        kind: node.kind,
        size: node.size,
        expanded,
        unreadable: node.unreadable,
        depth,
        is_last_sibling: is_last,
        parent_last_siblings: parent_last_siblings.clone(),
    });

    if !expanded {
        return;
    }

    if let Some(children) = &node.children {
        let child_count = children.len();
        for (i, child) in children.iter().enumerate() {
            let mut child_parent_lasts = parent_last_siblings.clone();
            if depth > 0 {
                child_parent_lasts.push(is_last);
            }
            flatten_node(
                child,
                depth + 1,
                i == child_count - 1,
                child_parent_lasts,
                state,
                items,
            );
        }
    }
}
