//! Terminal user interface for dirscope.
//!
//! A directory tree on the left, an info panel for the selected entry on the
//! right, and fixed function keys for file operations:
//!
//! - `F5` - Copy the selection to `<name>_copy`
//! - `F6` - Move the selection to `<name>_moved`
//! - `F7` - Create `new_directory` in the root
//! - `F8` - Delete the selection
//! - `F9` - Create `new_file.txt` in the root
//!
//! # Usage
//!
//! ```rust,no_run
//! use dirscope_core::ExplorerConfig;
//!
//! dirscope_tui::run(ExplorerConfig::new(".")).unwrap();
//! ```

pub mod app;
mod dir_tree;
mod event;
mod theme;
mod ui;

pub use app::{App, AppResult, Notification, Notifications};
pub use dir_tree::{DirNode, DirTree, NodeKind, VisibleItem};
pub use event::KeyAction;
pub use theme::Theme;

use dirscope_core::ExplorerConfig;

/// Run the TUI application until the user quits.
///
/// Everything runs on the calling thread.
pub fn run(config: ExplorerConfig) -> AppResult<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::new(config).run(terminal));
    ratatui::restore();

    result
}
