use crate::ui::widgets::popup::{centered_rect, popup_block};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: &[(&str, &str)] = &[
    ("←/→, Tab", "Switch tab"),
    ("1 2 3", "Jump to Characters / Locations / Episodes"),
    ("↑/↓", "Move selection"),
    ("PgUp/PgDn", "Jump 5 rows"),
    ("Home/End", "First / last row"),
    ("Enter", "Show details of the selected card"),
    ("/", "Filter the current tab by name"),
    ("r", "Reload everything"),
    ("Esc", "Close popup / clear filter"),
    ("F1, ?", "Toggle this help"),
    ("q", "Quit"),
];

pub fn render_help_popup(f: &mut Frame<'_>) {
    let popup_area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(popup_block("Help & Keyboard Shortcuts", Color::Yellow))
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press ? or Esc to close",
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

fn build_help_lines() -> Vec<TextLine<'static>> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        TextLine::from(Span::styled(
            "Rick and Morty Explorer",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Browse characters, locations and episodes. Locations list their residents, episodes their cast."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for (key, action) in SHORTCUTS {
        lines.push(TextLine::from(vec![
            Span::styled(format!("  {key:<10}"), key_style),
            Span::raw(format!(" - {action}")),
        ]));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "CLI Options:",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
