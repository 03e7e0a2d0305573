//! Notification toasts drawn in the bottom-right corner.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::app::Notifications;
use crate::theme::Theme;
use crate::ui::truncate_to_width;

const MAX_TOAST_WIDTH: u16 = 60;

/// Stack of toasts, newest at the bottom edge.
pub struct ToastStack<'a> {
    notifications: &'a Notifications,
    theme: &'a Theme,
}

impl<'a> ToastStack<'a> {
    pub fn new(notifications: &'a Notifications, theme: &'a Theme) -> Self {
        Self {
            notifications,
            theme,
        }
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_width = MAX_TOAST_WIDTH.min(area.width);
        if max_width < 5 {
            return;
        }

        let mut bottom = area.y + area.height;
        for notification in self.notifications.iter() {
            if bottom < area.y + 3 {
                break;
            }

            let text = truncate_to_width(notification.message(), max_width as usize - 4);
            let width = (text.width() as u16 + 4).min(max_width);
            let rect = Rect::new(area.x + area.width - width, bottom - 3, width, 3);
            let color = self.theme.severity_color(notification.severity());

            Clear.render(rect, buf);
            Paragraph::new(Line::from(Span::styled(
                format!(" {text}"),
                Style::new().fg(color),
            )))
            .style(self.theme.toast)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::new().fg(color)),
            )
            .render(rect, buf);

            bottom -= 3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirscope_ops::Notice;
    use std::time::Duration;

    #[test]
    fn test_newest_toast_at_bottom() {
        let mut notifications = Notifications::new(Duration::from_secs(3));
        notifications.push(Notice::info("older"));
        notifications.push(Notice::error("Error: boom"));

        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        ToastStack::new(&notifications, &theme).render(area, &mut buf);

        let row = |y: u16| (0..40).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>();
        assert!(row(8).contains("Error: boom"));
        assert!(row(5).contains("older"));
    }
}
