//! File operation types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Name of the directory created by [`FileOperation::CreateDirectory`].
pub const NEW_DIRECTORY_NAME: &str = "new_directory";

/// Name of the file created by [`FileOperation::CreateFile`].
pub const NEW_FILE_NAME: &str = "new_file.txt";

/// Suffix appended to the name of a copied entry.
pub const COPY_SUFFIX: &str = "_copy";

/// Suffix appended to the name of a moved entry.
pub const MOVE_SUFFIX: &str = "_moved";

/// A file operation the user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum FileOperation {
    /// Copy the selected entry next to itself.
    Copy,
    /// Move the selected entry to a sibling name.
    Move,
    /// Delete the selected entry.
    Delete,
    /// Create `new_directory` in the working directory.
    #[strum(to_string = "Create directory")]
    CreateDirectory,
    /// Create an empty `new_file.txt` in the working directory.
    #[strum(to_string = "Create file")]
    CreateFile,
}

impl FileOperation {
    /// Check whether this operation acts on the selection.
    ///
    /// Create operations act on the working directory instead.
    pub fn requires_selection(&self) -> bool {
        matches!(self, Self::Copy | Self::Move | Self::Delete)
    }
}
