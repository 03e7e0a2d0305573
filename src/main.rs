//! dirscope - a terminal file browser with a directory tree and info panel.
//!
//! Usage:
//!   dirscope [PATH]                 Browse PATH (defaults to the current directory)
//!   dirscope --log-file run.log     Write diagnostics to run.log
//!   dirscope --help                 Show help

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Context, Result, ensure, eyre};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use dirscope_core::{ExplorerConfig, ThemeName, UserSettings};

#[derive(Parser)]
#[command(
    name = "dirscope",
    version,
    about = "Browse a directory tree and run quick file operations",
    long_about = "dirscope shows a directory tree next to an info panel for the \
                  selected entry.\n\n\
                  F5 copies, F6 moves and F8 deletes the selection; F7 and F9 \
                  create a directory or an empty file in the root."
)]
struct Cli {
    /// Directory to browse (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden entries
    #[arg(long, overrides_with = "no_hidden")]
    hidden: bool,

    /// Hide entries starting with a dot
    #[arg(long, overrides_with = "hidden")]
    no_hidden: bool,

    /// Use the light theme
    #[arg(long)]
    light: bool,

    /// Start with the info panel hidden
    #[arg(long)]
    no_info: bool,

    /// Write logs to this file (filter with RUST_LOG, default `info`)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command line overrides on top of the settings-derived config.
    fn apply(&self, config: &mut ExplorerConfig) {
        if self.hidden {
            config.show_hidden = true;
        }
        if self.no_hidden {
            config.show_hidden = false;
        }
        if self.light {
            config.theme = ThemeName::Light;
        }
        if self.no_info {
            config.show_info_panel = false;
        }
    }
}

/// Install a file-backed tracing subscriber. The returned guard flushes the
/// writer on drop and must live until exit.
fn init_logging(log_file: &Path) -> Result<WorkerGuard> {
    let file_name = log_file
        .file_name()
        .ok_or_else(|| eyre!("Invalid log file path: {}", log_file.display()))?;
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let _guard = cli.log_file.as_deref().map(init_logging).transpose()?;

    let settings = UserSettings::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring user settings");
        UserSettings::default()
    });

    let metadata = std::fs::metadata(&cli.path)
        .with_context(|| format!("Invalid path: {}", cli.path.display()))?;
    ensure!(metadata.is_dir(), "Not a directory: {}", cli.path.display());

    let mut config = ExplorerConfig::from_settings(&cli.path, &settings);
    cli.apply(&mut config);

    dirscope_tui::run(config)?;

    Ok(())
}
