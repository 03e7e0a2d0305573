//! Key mapping for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dirscope_ops::FileOperation;

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    /// Collapse the directory under the cursor, or jump to its parent.
    MoveLeft,
    /// Expand the directory under the cursor.
    MoveRight,
    JumpToTop,
    JumpToBottom,
    PageUp,
    PageDown,

    // Selection
    /// Select the node under the cursor; directories also toggle.
    Activate,
    /// Select the node under the cursor without toggling.
    Select,

    // File operations
    Copy,
    Move,
    CreateDirectory,
    Delete,
    CreateFile,

    // UI toggles
    ToggleInfo,
    ToggleHelp,
    ToggleTheme,

    Reload,
    Cancel,
    Quit,

    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Esc, _) => KeyAction::Cancel,

            // File operations
            (KeyCode::F(5), _) => KeyAction::Copy,
            (KeyCode::F(6), _) => KeyAction::Move,
            (KeyCode::F(7), _) => KeyAction::CreateDirectory,
            (KeyCode::F(8), _) => KeyAction::Delete,
            (KeyCode::F(9), _) => KeyAction::CreateFile,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,
            (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::MoveLeft,
            (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::MoveRight,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,
            (KeyCode::Left, _) => KeyAction::MoveLeft,
            (KeyCode::Right, _) => KeyAction::MoveRight,

            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT | KeyModifiers::NONE) => {
                KeyAction::JumpToBottom
            }
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,

            (KeyCode::Enter, _) => KeyAction::Activate,
            (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::Select,

            (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Reload,
            (KeyCode::Char('i'), KeyModifiers::NONE) => KeyAction::ToggleInfo,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,
            (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                KeyAction::ToggleHelp
            }

            _ => KeyAction::None,
        }
    }

    /// The file operation bound to this action, if any.
    pub fn file_operation(self) -> Option<FileOperation> {
        match self {
            KeyAction::Copy => Some(FileOperation::Copy),
            KeyAction::Move => Some(FileOperation::Move),
            KeyAction::CreateDirectory => Some(FileOperation::CreateDirectory),
            KeyAction::Delete => Some(FileOperation::Delete),
            KeyAction::CreateFile => Some(FileOperation::CreateFile),
            _ => None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "File Operations",
            bindings: vec![
                KeyBinding { keys: "F5", description: "Copy to <name>_copy" },
                KeyBinding { keys: "F6", description: "Move to <name>_moved" },
                KeyBinding { keys: "F7", description: "Create new_directory" },
                KeyBinding { keys: "F8", description: "Delete selection" },
                KeyBinding { keys: "F9", description: "Create new_file.txt" },
            ],
        },
        HelpSection {
            title: "Selection",
            bindings: vec![
                KeyBinding { keys: "Enter", description: "Select (toggle dirs)" },
                KeyBinding { keys: "Space", description: "Select" },
                KeyBinding { keys: "Esc", description: "Clear selection" },
            ],
        },
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move up/down" },
                KeyBinding { keys: "h/l ←/→", description: "Collapse/expand" },
                KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
                KeyBinding { keys: "PgUp/PgDn", description: "Page up/down" },
            ],
        },
        HelpSection {
            title: "General",
            bindings: vec![
                KeyBinding { keys: "r", description: "Reload tree" },
                KeyBinding { keys: "i", description: "Toggle info panel" },
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}
