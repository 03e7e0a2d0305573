//! Info panel showing metadata of the selected entry.

use std::path::Path;

use dirscope_core::{EntryInfo, NO_SELECTION_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Info panel widget.
///
/// Inspects the filesystem on every render, so a selection that vanished
/// since the last frame shows the empty text.
pub struct InfoPanel<'a> {
    selection: Option<&'a Path>,
    theme: &'a Theme,
}

impl<'a> InfoPanel<'a> {
    pub fn new(selection: Option<&'a Path>, theme: &'a Theme) -> Self {
        Self { selection, theme }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let Some(info) = self.selection.and_then(EntryInfo::inspect) else {
            return vec![Line::styled(NO_SELECTION_TEXT, self.theme.label)];
        };

        info.lines()
            .into_iter()
            .map(|(label, value)| {
                let value_style = match label {
                    "Selected" => self.theme.title,
                    _ => ratatui::style::Style::new().fg(self.theme.foreground),
                };
                Line::from(vec![
                    Span::styled(format!("{label}: "), self.theme.label),
                    Span::styled(value, value_style),
                ])
            })
            .collect()
    }
}

impl Widget for InfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(" Info ")
            .title_style(self.theme.title);

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
