//! Explorer configuration and the optional user settings file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::ConfigError;

/// Default lifetime of a notification toast.
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 3000;

/// Color theme selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

/// Configuration for an explorer session.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ExplorerConfig {
    /// Root of the directory tree; also the directory new entries are created in.
    pub root: PathBuf,

    /// Show entries whose name starts with a dot.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub show_hidden: bool,

    /// Show the info panel next to the tree.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub show_info_panel: bool,

    /// Color theme.
    #[builder(default)]
    #[serde(default)]
    pub theme: ThemeName,

    /// How long a notification stays visible, in milliseconds.
    #[builder(default = "DEFAULT_NOTIFICATION_TIMEOUT_MS")]
    #[serde(default = "default_notification_timeout_ms")]
    pub notification_timeout_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_notification_timeout_ms() -> u64 {
    DEFAULT_NOTIFICATION_TIMEOUT_MS
}

impl ExplorerConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.root {
            Some(root) if root.as_os_str().is_empty() => {
                return Err("Root path cannot be empty".to_string());
            }
            None => return Err("Root path is required".to_string()),
            Some(_) => {}
        }
        if self.notification_timeout_ms == Some(0) {
            return Err("Notification timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl ExplorerConfig {
    /// Create a new config builder.
    pub fn builder() -> ExplorerConfigBuilder {
        ExplorerConfigBuilder::default()
    }

    /// Create a config with defaults for the given root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            show_hidden: true,
            show_info_panel: true,
            theme: ThemeName::default(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
        }
    }

    /// Create a config for `root` seeded from user settings.
    pub fn from_settings(root: impl Into<PathBuf>, settings: &UserSettings) -> Self {
        Self {
            root: root.into(),
            show_hidden: settings.show_hidden,
            show_info_panel: settings.show_info_panel,
            theme: settings.theme,
            notification_timeout_ms: settings.notification_timeout_ms.max(1),
        }
    }

    /// Notification lifetime as a duration.
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// User settings read from `<config dir>/dirscope/settings.toml`.
///
/// The file is optional and only ever read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Show hidden entries.
    pub show_hidden: bool,
    /// Show the info panel on startup.
    pub show_info_panel: bool,
    /// Color theme.
    pub theme: ThemeName,
    /// Notification lifetime in milliseconds.
    pub notification_timeout_ms: u64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            show_hidden: true,
            show_info_panel: true,
            theme: ThemeName::default(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
        }
    }
}

impl UserSettings {
    /// Get the settings file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dirscope").join("settings.toml"))
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        if settings.notification_timeout_ms == 0 {
            return Err(ConfigError::invalid(format!(
                "notification_timeout_ms in {} must be greater than zero",
                origin.display()
            )));
        }
        Ok(settings)
    }

    /// Load settings from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::io(path, e)),
        }
    }

    /// Load settings from the default location, or defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}
