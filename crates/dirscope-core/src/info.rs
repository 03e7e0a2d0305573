//! Entry inspection and the info panel text.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::Display;

/// Text shown when there is nothing (or nothing valid) to describe.
pub const NO_SELECTION_TEXT: &str = "No file selected.";

/// Type of a filesystem entry as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Determine the kind of `path`, following symlinks.
    ///
    /// Anything that is not a directory counts as a file. Returns `None` when
    /// the path does not exist or cannot be stat'ed.
    pub fn of(path: &Path) -> Option<Self> {
        fs::metadata(path).ok().map(|m| Self::from_metadata(&m))
    }

    fn from_metadata(metadata: &fs::Metadata) -> Self {
        if metadata.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }
}

/// Metadata describing one entry, recomputed from the filesystem on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInfo {
    /// Final path component, or the whole path when there is none.
    pub name: String,
    /// Directory or file.
    pub kind: EntryKind,
    /// Size in bytes as reported by stat.
    pub size: u64,
    /// The path exactly as it was given.
    pub path: PathBuf,
}

impl EntryInfo {
    /// Inspect `path`, returning `None` if it does not exist.
    pub fn inspect(path: &Path) -> Option<Self> {
        let metadata = fs::metadata(path).ok()?;
        Some(Self {
            name: display_name(path),
            kind: EntryKind::from_metadata(&metadata),
            size: metadata.len(),
            path: path.to_path_buf(),
        })
    }

    /// Size formatted with thousands separators and a unit.
    pub fn size_text(&self) -> String {
        format!("{} bytes", format_thousands(self.size))
    }

    /// The four labelled lines shown in the info panel.
    pub fn lines(&self) -> [(&'static str, String); 4] {
        [
            ("Selected", self.name.clone()),
            ("Type", self.kind.to_string()),
            ("Size", self.size_text()),
            ("Path", self.path.display().to_string()),
        ]
    }
}

/// Render the info panel text for an optional path.
///
/// Missing and stale paths both produce [`NO_SELECTION_TEXT`].
pub fn render_info(path: Option<&Path>) -> String {
    match path.and_then(EntryInfo::inspect) {
        Some(info) => info
            .lines()
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n"),
        None => NO_SELECTION_TEXT.to_string(),
    }
}

/// Name to display for a path: its final component, or the path itself
/// when it has none (`/`, `..`).
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) if !name.is_empty() => name.to_string_lossy().into_owned(),
        _ => path.display().to_string(),
    }
}

/// Format an integer with `,` between groups of three digits.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
