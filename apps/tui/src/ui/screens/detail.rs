use crate::ui::widgets::popup::{centered_rect, popup_block};
use multiverse_tui::detail::Notification;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_detail_popup(notification: &Notification, f: &mut Frame<'_>) {
    let popup_area = centered_rect(50, 40, f.area());
    f.render_widget(Clear, popup_area);

    let accent = if notification.failed {
        Color::Red
    } else {
        Color::Yellow
    };

    let mut lines: Vec<TextLine<'_>> = Vec::with_capacity(notification.lines.len() + 1);
    for (i, line) in notification.lines.iter().enumerate() {
        if i == 0 {
            lines.push(TextLine::from(Span::styled(
                line.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(TextLine::from(line.as_str()));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(popup_block(&notification.title, accent))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Enter or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}
