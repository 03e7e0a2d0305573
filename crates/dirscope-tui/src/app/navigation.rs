//! Cursor movement and expansion over the visible tree rows.

use super::App;
use super::constants::PAGE_SIZE;
use crate::dir_tree::NodeKind;
use crate::event::KeyAction;

impl App {
    /// Apply a navigation action. Returns false if `action` is not one.
    pub(super) fn navigate(&mut self, action: KeyAction) -> bool {
        let len = self.visible_items().len();
        match action {
            KeyAction::MoveUp => self.tree_state.move_up(1),
            KeyAction::MoveDown => self.tree_state.move_down(1, len),
            KeyAction::PageUp => self.tree_state.move_up(PAGE_SIZE),
            KeyAction::PageDown => self.tree_state.move_down(PAGE_SIZE, len),
            KeyAction::JumpToTop => self.tree_state.jump_to_top(),
            KeyAction::JumpToBottom => self.tree_state.jump_to_bottom(len),
            KeyAction::MoveRight => self.expand_current(),
            KeyAction::MoveLeft => self.collapse_or_parent(),
            _ => return false,
        }
        true
    }

    fn expand_current(&mut self) {
        let Some(item) = self.current_item() else {
            return;
        };
        if item.kind == NodeKind::Directory && !item.expanded {
            self.tree.expand(&item.path, &mut self.tree_state);
        }
    }

    /// Collapse the directory under the cursor, or move to its parent row.
    fn collapse_or_parent(&mut self) {
        let Some(item) = self.current_item() else {
            return;
        };

        if item.expanded {
            self.tree.collapse(&item.path, &mut self.tree_state);
            return;
        }

        let Some(parent) = item.path.parent() else {
            return;
        };
        if let Some(index) = self
            .visible_items()
            .iter()
            .position(|row| row.path == parent)
        {
            self.tree_state.selected = index;
        }
    }
}
