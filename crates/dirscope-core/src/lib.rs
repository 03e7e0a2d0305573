//! Core types for dirscope.
//!
//! This crate holds the pieces that do not depend on a terminal: the single
//! active [`Selection`], entry inspection for the info panel, and the
//! explorer configuration.

mod config;
mod error;
mod info;
mod selection;

pub use config::{
    DEFAULT_NOTIFICATION_TIMEOUT_MS, ExplorerConfig, ExplorerConfigBuilder, ThemeName,
    UserSettings,
};
pub use error::ConfigError;
pub use info::{
    EntryInfo, EntryKind, NO_SELECTION_TEXT, display_name, format_thousands, render_info,
};
pub use selection::Selection;
