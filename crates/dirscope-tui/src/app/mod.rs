//! Main application state and logic.

mod constants;
mod navigation;
mod notifications;
mod render;
pub mod state;

use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;

use dirscope_core::{ExplorerConfig, Selection};
use dirscope_ops::{Dispatcher, FileOperation};

use crate::dir_tree::{DirTree, NodeKind, VisibleItem};
use crate::event::KeyAction;
use crate::theme::Theme;
use crate::ui::TreeState;

use self::constants::TICK_INTERVAL_MS;
pub use self::notifications::{Notification, Notifications};
use self::state::AppMode;

/// Result type for the TUI application.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App {
    config: ExplorerConfig,
    mode: AppMode,
    theme: Theme,
    tree: DirTree,
    tree_state: TreeState,
    selection: Selection,
    dispatcher: Dispatcher,
    notifications: Notifications,
    show_info: bool,
    needs_redraw: bool,
}

impl App {
    /// Create a new application rooted at `config.root`.
    ///
    /// New entries are created in the root directory.
    pub fn new(config: ExplorerConfig) -> Self {
        let tree = DirTree::new(&config.root, config.show_hidden);
        let tree_state = TreeState::new(config.root.clone());

        Self {
            mode: AppMode::Normal,
            theme: Theme::from_name(config.theme),
            tree,
            tree_state,
            selection: Selection::new(),
            dispatcher: Dispatcher::new(&config.root),
            notifications: Notifications::new(config.notification_timeout()),
            show_info: config.show_info_panel,
            needs_redraw: true,
            config,
        }
    }

    /// Run the application event loop until the user quits.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        tracing::info!(root = %self.config.root.display(), "explorer started");

        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    match event {
                        Event::Key(key_event) => self.handle_key(key_event),
                        Event::Resize(..) => self.needs_redraw = true,
                        _ => {}
                    }
                }

                _ = interval.tick() => {
                    self.tick(Instant::now());
                }
            }
        }

        tracing::info!("explorer stopped");
        Ok(())
    }

    /// Handle a raw key event. Only presses are acted upon.
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Press {
            self.handle_action(KeyAction::from_key_event(key_event));
        }
    }

    /// Periodic housekeeping: expire old notifications.
    pub fn tick(&mut self, now: Instant) {
        if self.notifications.expire(now) {
            self.needs_redraw = true;
        }
    }

    /// Apply a key action to the application state.
    pub fn handle_action(&mut self, action: KeyAction) {
        if action == KeyAction::None {
            return;
        }
        self.needs_redraw = true;

        if self.mode == AppMode::Help {
            match action {
                KeyAction::ToggleHelp | KeyAction::Cancel => self.mode = AppMode::Normal,
                KeyAction::Quit => self.mode = AppMode::Quit,
                _ => {}
            }
            return;
        }

        if let Some(op) = action.file_operation() {
            self.run_operation(op);
            return;
        }

        if self.navigate(action) {
            return;
        }

        match action {
            KeyAction::Activate => self.activate(true),
            KeyAction::Select => self.activate(false),
            KeyAction::Reload => self.tree.reload(&mut self.tree_state),
            KeyAction::ToggleInfo => self.show_info = !self.show_info,
            KeyAction::ToggleTheme => self.theme = self.theme.toggle(),
            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::Cancel => {
                self.selection.clear();
                self.notifications.clear();
            }
            KeyAction::Quit => self.mode = AppMode::Quit,
            _ => {}
        }
    }

    /// Select the node under the cursor, toggling directories if asked.
    fn activate(&mut self, toggle_dirs: bool) {
        let Some(item) = self.current_item() else {
            return;
        };

        tracing::debug!(path = %item.path.display(), "selected");
        self.selection.select(item.path.clone());

        if toggle_dirs && item.kind == NodeKind::Directory {
            self.tree.toggle(&item.path, &mut self.tree_state);
        }
    }

    /// Dispatch a file operation, reload the tree on success and show the
    /// resulting notice.
    fn run_operation(&mut self, op: FileOperation) {
        let outcome = self.dispatcher.dispatch(op, &mut self.selection);
        if outcome.reload {
            self.tree.reload(&mut self.tree_state);
        }
        self.notifications.push(outcome.notice);
    }

    /// The visible rows of the tree.
    pub fn visible_items(&self) -> Vec<VisibleItem> {
        self.tree.flatten(&self.tree_state)
    }

    /// The row under the cursor.
    pub fn current_item(&self) -> Option<VisibleItem> {
        self.visible_items().into_iter().nth(self.tree_state.selected)
    }

    /// The currently selected path.
    pub fn selection(&self) -> Option<&Path> {
        self.selection.current()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn show_info(&self) -> bool {
        self.show_info
    }
}
