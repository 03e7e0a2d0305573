//! Directory tree widget.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

use dirscope_core::Selection;

use crate::dir_tree::{NodeKind, VisibleItem};
use crate::theme::Theme;
use crate::ui::{format_size, truncate_to_width};

/// State for the tree view.
#[derive(Debug, Default, Clone)]
pub struct TreeState {
    /// Currently selected index in the flattened view.
    pub selected: usize,
    /// Scroll offset.
    pub offset: usize,
    /// Set of expanded directory paths.
    pub expanded: HashSet<PathBuf>,
}

impl TreeState {
    /// Create new tree state with the root expanded.
    pub fn new(root_path: PathBuf) -> Self {
        let mut expanded = HashSet::new();
        expanded.insert(root_path);
        Self {
            selected: 0,
            offset: 0,
            expanded,
        }
    }

    /// Expand a path.
    pub fn expand(&mut self, path: &Path) {
        self.expanded.insert(path.to_path_buf());
    }

    /// Collapse a path.
    pub fn collapse(&mut self, path: &Path) {
        self.expanded.remove(path);
    }

    /// Check if a path is expanded.
    pub fn is_expanded(&self, path: &Path) -> bool {
        self.expanded.contains(path)
    }

    /// Move selection up.
    pub fn move_up(&mut self, count: usize) {
        self.selected = self.selected.saturating_sub(count);
    }

    /// Move selection down.
    pub fn move_down(&mut self, count: usize, max: usize) {
        self.selected = (self.selected + count).min(max.saturating_sub(1));
    }

    /// Jump to top.
    pub fn jump_to_top(&mut self) {
        self.selected = 0;
    }

    /// Jump to bottom.
    pub fn jump_to_bottom(&mut self, max: usize) {
        self.selected = max.saturating_sub(1);
    }

    /// Ensure selected item is visible, adjusting offset if needed.
    pub fn ensure_visible(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + viewport_height {
            self.offset = self.selected - viewport_height + 1;
        }
    }
}

/// Tree view widget.
pub struct TreeView<'a> {
    items: &'a [VisibleItem],
    selection: &'a Selection,
    theme: &'a Theme,
    block: Option<Block<'a>>,
}

impl<'a> TreeView<'a> {
    /// Create a new tree view over already flattened rows.
    pub fn new(items: &'a [VisibleItem], selection: &'a Selection, theme: &'a Theme) -> Self {
        Self {
            items,
            selection,
            theme,
            block: None,
        }
    }

    /// Set the block (border) for the widget.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn node_style(&self, item: &VisibleItem) -> Style {
        let style = match item.kind {
            NodeKind::Directory => self.theme.directory,
            NodeKind::File { executable: true } => self.theme.executable,
            NodeKind::File { executable: false } => self.theme.file,
            NodeKind::Symlink { broken: true } => self.theme.symlink.add_modifier(Modifier::DIM),
            NodeKind::Symlink { broken: false } => self.theme.symlink,
            NodeKind::Other => Style::new().fg(self.theme.muted),
        };
        if item.unreadable {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

/// Guide line prefix for a row.
fn tree_prefix(item: &VisibleItem) -> String {
    let mut prefix = String::new();
    for &parent_is_last in &item.parent_last_siblings {
        prefix.push_str(if parent_is_last { "  " } else { "│ " });
    }
    if item.depth > 0 {
        prefix.push_str(if item.is_last_sibling { "└─" } else { "├─" });
    }
    prefix
}

impl StatefulWidget for TreeView<'_> {
    type State = TreeState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner_area = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner_area.height == 0 || inner_area.width == 0 {
            return;
        }

        let viewport_height = inner_area.height as usize;
        state.ensure_visible(viewport_height);

        let start = state.offset;
        let end = (start + viewport_height).min(self.items.len());
        let size_text_width: usize = 10;

        for (row_idx, item_idx) in (start..end).enumerate() {
            let item = &self.items[item_idx];
            let y = inner_area.y + row_idx as u16;
            let is_cursor = item_idx == state.selected;
            let is_selected = self.selection.is_selected(&item.path);

            let prefix = tree_prefix(item);
            let (marker, marker_style) = if is_selected {
                ("● ", self.theme.marked)
            } else {
                ("  ", Style::new().fg(self.theme.muted))
            };

            let expand_indicator = match item.kind {
                NodeKind::Directory if item.expanded => "▼ ",
                NodeKind::Directory => "▶ ",
                _ => "  ",
            };

            let size_text = match item.kind {
                NodeKind::File { .. } => format_size(item.size),
                _ => String::new(),
            };

            let used = prefix.width() + 4;
            let available_for_name = (inner_area.width as usize)
                .saturating_sub(used)
                .saturating_sub(size_text_width + 1);
            let name = if item.unreadable {
                format!("{} (unreadable)", item.name)
            } else {
                item.name.clone()
            };
            let name = truncate_to_width(&name, available_for_name);
            let name_padding = " ".repeat(available_for_name.saturating_sub(name.width()));

            let line = Line::from(vec![
                Span::styled(prefix, self.theme.tree_lines),
                Span::styled(marker, marker_style),
                Span::styled(expand_indicator, Style::new().fg(self.theme.muted)),
                Span::styled(name, self.node_style(item)),
                Span::raw(name_padding),
                Span::raw(" "),
                Span::styled(
                    format!("{size_text:>size_text_width$}"),
                    Style::new().fg(self.theme.muted),
                ),
            ]);

            let line = if is_cursor {
                line.style(self.theme.selected)
            } else if is_selected {
                line.style(Style::new().add_modifier(Modifier::BOLD))
            } else {
                line
            };

            Widget::render(line, Rect::new(inner_area.x, y, inner_area.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, depth: usize, is_last: bool, parents: Vec<bool>) -> VisibleItem {
        VisibleItem {
            path: PathBuf::from(name),
            name: name.to_string(),
            kind: NodeKind::File { executable: false },
            size: 0,
            expanded: false,
            unreadable: false,
            depth,
            is_last_sibling: is_last,
            parent_last_siblings: parents,
        }
    }

    #[test]
    fn test_prefix() {
        assert_eq!(tree_prefix(&item("root", 0, true, vec![])), "");
        assert_eq!(tree_prefix(&item("a", 1, false, vec![])), "├─");
        assert_eq!(tree_prefix(&item("b", 2, true, vec![false])), "│ └─");
        assert_eq!(tree_prefix(&item("c", 2, false, vec![true])), "  ├─");
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = TreeState::new(PathBuf::from("/"));
        state.move_down(3, 5);
        assert_eq!(state.selected, 3);
        state.move_down(10, 5);
        assert_eq!(state.selected, 4);
        state.move_up(10);
        assert_eq!(state.selected, 0);
        state.jump_to_bottom(7);
        assert_eq!(state.selected, 6);
        state.jump_to_top();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_ensure_visible() {
        let mut state = TreeState::default();
        state.selected = 12;
        state.ensure_visible(5);
        assert_eq!(state.offset, 8);
        state.selected = 3;
        state.ensure_visible(5);
        assert_eq!(state.offset, 3);
    }

    #[test]
    fn test_render_marks_selected_path() {
        let items = vec![item("root", 0, true, vec![]), item("a.txt", 1, true, vec![])];
        let theme = Theme::dark();
        let mut state = TreeState::default();
        let mut selection = Selection::new();
        selection.select("a.txt");
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 2));

        TreeView::new(&items, &selection, &theme).render(buf.area, &mut buf, &mut state);

        let row: String = (0..30).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("●"));
        assert!(row.contains("a.txt"));
    }
}
