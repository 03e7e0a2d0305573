//! Application rendering.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use dirscope_core::display_name;

use super::App;
use super::state::AppMode;
use crate::theme::Theme;
use crate::ui::{AppLayout, HelpOverlay, InfoPanel, ToastStack, TreeView, truncate_to_width};

const FOOTER_KEYS: [(&str, &str); 7] = [
    ("F5", "Copy"),
    ("F6", "Move"),
    ("F7", "Mkdir"),
    ("F8", "Delete"),
    ("F9", "Touch"),
    ("?", "Help"),
    ("q", "Quit"),
];

impl App {
    pub(super) fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::new(area, self.show_info);
        let items = self.visible_items();

        render_header(self, layout.header, frame.buffer_mut());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(format!(" {} ", display_name(self.tree.root_path())))
            .title_style(self.theme.title);
        let tree_view = TreeView::new(&items, &self.selection, &self.theme).block(block);
        frame.render_stateful_widget(tree_view, layout.main, &mut self.tree_state);

        if let Some(details) = layout.details {
            frame.render_widget(InfoPanel::new(self.selection.current(), &self.theme), details);
        }

        render_footer(&self.theme, layout.footer, frame.buffer_mut());

        let toast_area = Rect::new(area.x, layout.main.y, area.width, layout.main.height);
        frame.render_widget(ToastStack::new(&self.notifications, &self.theme), toast_area);

        if self.mode == AppMode::Help {
            frame.render_widget(HelpOverlay::new(&self.theme), area);
        }
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let theme = &app.theme;
    let title = Span::styled(" dirscope ", theme.title.add_modifier(Modifier::BOLD));
    let root = Span::styled(format!(" {} ", app.tree.root_path().display()), theme.header);

    let status = match app.selection.current() {
        Some(path) => {
            let text = truncate_to_width(&path.display().to_string(), area.width as usize / 2);
            let kind = app
                .selection
                .kind()
                .map_or_else(|| "missing".to_string(), |k| k.to_string().to_lowercase());
            Span::styled(format!(" selected: {text} ({kind}) "), theme.marked)
        }
        None => Span::raw(""),
    };

    let hidden = if app.tree.show_hidden() {
        Span::raw("")
    } else {
        Span::styled(" (hidden files off) ", Style::new().fg(theme.muted))
    };

    Paragraph::new(Line::from(vec![title, root, hidden, status]))
        .style(theme.header)
        .render(area, buf);
}

fn render_footer(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let spans: Vec<Span> = FOOTER_KEYS
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!(" {key} "), theme.help_key),
                Span::styled(format!("{desc} "), theme.help_desc),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .style(theme.footer)
        .render(area, buf);
}
