use crate::app::App;
use crate::ui::widgets::tables::scroll_offset;
use multiverse_tui::render::{Card, ContainerContent};
use multiverse_tui::Category;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap};
use ratatui::Frame;

const SELECTED_BG: Color = Color::Rgb(0, 0, 238);

pub fn render_browse(app: &App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_tabs(app, f, chunks[0]);
    render_panel(app, f, chunks[1]);
    render_status(app, f, chunks[2]);
}

const fn category_color(category: Category) -> Color {
    match category {
        Category::Characters => Color::Green,
        Category::Locations => Color::Cyan,
        Category::Episodes => Color::Magenta,
    }
}

fn render_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = app
        .document
        .tabs
        .triggers()
        .iter()
        .enumerate()
        .map(|(i, trigger)| TextLine::from(format!("{} {}", i + 1, trigger.label)))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.document.tabs.active_index().unwrap_or(0))
        .block(
            Block::default()
                .title("Rick and Morty Explorer")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(category_color(app.active_category()))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let category = app.active_category();
    let color = category_color(category);

    let placeholder = |text: String, fg: Color| {
        Paragraph::new(text)
            .block(
                Block::default()
                    .title(category.label())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .style(Style::default().fg(fg))
            .alignment(Alignment::Center)
    };

    if let ContainerContent::Message(message) = app.document.content(category) {
        f.render_widget(placeholder(message.clone(), Color::Red), area);
        return;
    }

    let cards = app.visible_cards();
    if cards.is_empty() {
        let text = if app.loading {
            format!("Loading {}...", category.as_str())
        } else if app.search_query.is_empty() {
            format!("No {} found.", category.as_str())
        } else {
            format!("No {} match \"{}\".", category.as_str(), app.search_query)
        };
        f.render_widget(placeholder(text, Color::Gray), area);
        return;
    }

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_card_table(app, &cards, f, content[0]);
    if let Some(card) = cards.get(app.selected_index()) {
        render_card_details(card, f, content[1]);
    }
}

fn render_card_table(app: &App, cards: &[&Card], f: &mut Frame<'_>, area: Rect) {
    let category = app.active_category();
    let labels: Vec<&str> = cards
        .first()
        .map(|card| card.fields.iter().take(2).map(|field| field.label).collect())
        .unwrap_or_default();

    let mut header_cells = vec![Cell::from("ID"), Cell::from("Name")];
    header_cells.extend(labels.iter().map(|label| Cell::from(*label)));
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = cards.len();
    let max_visible_rows = area.height.saturating_sub(4) as usize;
    let selected_index = app.selected_index();
    let scroll_offset = scroll_offset(total_rows, max_visible_rows, selected_index);

    let rows = cards
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(max_visible_rows)
        .map(|(i, card)| {
            let style = if i == selected_index {
                Style::default()
                    .bg(SELECTED_BG)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut cells = vec![Cell::from(card.id.clone()), Cell::from(card.title.clone())];
            cells.extend(
                card.fields
                    .iter()
                    .take(2)
                    .map(|field| Cell::from(field.value.clone())),
            );
            Row::new(cells).style(style)
        });

    let widths = [
        Constraint::Length(5),
        Constraint::Percentage(40),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];

    let title = if app.search_query.is_empty() {
        format!("{} ({} of {})", category.label(), selected_index + 1, total_rows)
    } else {
        format!(
            "{} ({} of {}, filter \"{}\")",
            category.label(),
            selected_index + 1,
            total_rows,
            app.search_query
        )
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(category_color(category))),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_card_details(card: &Card, f: &mut Frame<'_>, area: Rect) {
    let label_style = Style::default().fg(Color::Yellow);

    let mut lines = vec![
        TextLine::from(Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];

    for field in &card.fields {
        lines.push(TextLine::from(vec![
            Span::styled(format!("{}: ", field.label), label_style),
            Span::raw(field.value.clone()),
        ]));
    }

    if let Some(image) = &card.image {
        lines.push(TextLine::from(vec![
            Span::styled("Image: ", label_style),
            Span::styled(image.clone(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    if let Some(label) = card.related_label {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            format!("{label} ({})", card.related.len()),
            label_style.add_modifier(Modifier::BOLD),
        )));
        if card.related.is_empty() {
            lines.push(TextLine::from(Span::styled(
                "  (none)",
                Style::default().fg(Color::Gray),
            )));
        }
        for entry in &card.related {
            lines.push(TextLine::from(format!("  • {}", entry.name)));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!("#{}", card.id))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let line = if app.search_active {
        TextLine::from(vec![
            Span::styled("Search: ", key_style),
            Span::raw(app.search_query.clone()),
            Span::styled("_", Style::default().fg(Color::Gray)),
        ])
    } else if !app.status_message.is_empty() {
        TextLine::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Cyan),
        ))
    } else {
        TextLine::from(vec![
            Span::styled("←/→", key_style),
            Span::raw(": Tabs   "),
            Span::styled("↑/↓", key_style),
            Span::raw(": Navigate   "),
            Span::styled("Enter", key_style),
            Span::raw(": Details   "),
            Span::styled("/", key_style),
            Span::raw(": Filter   "),
            Span::styled("r", key_style),
            Span::raw(": Reload   "),
            Span::styled("?", key_style),
            Span::raw(": Help   "),
            Span::styled("q", key_style),
            Span::raw(": Quit"),
        ])
    };

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
