use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::path::PathBuf;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use multiverse_tui::bootstrap::bootstrap;
use multiverse_tui::config::ApiConfig;
use multiverse_tui::detail::DetailPresenter;
use multiverse_tui::fetch::Fetcher;
use multiverse_tui::render::{html, Document};
use multiverse_tui::Category;

use super::AppEvent;
use crate::app::{handle_input, App};
use crate::ui;

#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub json: bool,
    pub html: Option<PathBuf>,
}

/// Run the application in headless mode (no UI)
pub async fn run_headless<F>(fetcher: &F, config: &ApiConfig, options: &HeadlessOptions) -> Result<()>
where
    F: Fetcher + ?Sized,
{
    let mut doc = Document::new();
    bootstrap(fetcher, config, &mut doc).await;

    if let Some(path) = &options.html {
        std::fs::write(path, html::render_page(&doc))?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let summary = build_headless_summary(&doc);
    if options.json {
        let json = serde_json::to_string_pretty(&summary)?;
        println!("{json}");
    } else {
        print!("{}", render_headless_text(&summary));
    }

    Ok(())
}

fn render_headless_text(summary: &HeadlessSummary) -> String {
    let mut out = String::from("\nRick and Morty Explorer\n=======================\n");
    for category in &summary.categories {
        out.push_str(&format!("\n{} ({}):\n", category.label, category.count));
        if let Some(message) = &category.message {
            out.push_str(&format!("  {message}\n"));
        }
        for card in &category.cards {
            out.push_str(&format!("- #{} {}", card.id, card.title));
            if card.related > 0 {
                out.push_str(&format!(" [{} linked]", card.related));
            }
            out.push('\n');
        }
    }
    out
}

fn build_headless_summary(doc: &Document) -> HeadlessSummary {
    let categories = Category::ALL
        .iter()
        .map(|&category| {
            let content = doc.content(category);
            let cards = content
                .cards()
                .iter()
                .map(|card| HeadlessCard {
                    id: card.id.clone(),
                    title: card.title.clone(),
                    related: card.related.len(),
                })
                .collect::<Vec<_>>();
            HeadlessCategory {
                name: category.as_str(),
                label: category.label(),
                count: cards.len(),
                message: content.message().map(str::to_string),
                cards,
            }
        })
        .collect();

    HeadlessSummary { categories }
}

#[derive(serde::Serialize)]
struct HeadlessSummary {
    categories: Vec<HeadlessCategory>,
}

#[derive(serde::Serialize)]
struct HeadlessCategory {
    name: &'static str,
    #[serde(skip)]
    label: &'static str,
    count: usize,
    message: Option<String>,
    cards: Vec<HeadlessCard>,
}

#[derive(serde::Serialize)]
struct HeadlessCard {
    id: String,
    title: String,
    related: usize,
}

fn draw(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &App) -> Result<()> {
    terminal
        .draw(|f| ui::ui(app, f))
        .map(|_| ())
        .map_err(|e| color_eyre::eyre::eyre!("Terminal draw error: {e}"))
}

/// Clear the page and run the full load sequence, keeping the user's tab.
async fn reload<F>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    fetcher: &F,
) -> Result<()>
where
    F: Fetcher + ?Sized,
{
    let previous_tab = app.document.active_category();

    app.loading = true;
    app.document = Document::new();
    draw(terminal, app)?;

    bootstrap(fetcher, &app.config, &mut app.document).await;

    if let Some(category) = previous_tab {
        app.open_tab(category);
    }
    app.loading = false;
    app.clamp_selection();
    app.status_message = "Loaded".to_string();
    Ok(())
}

async fn handle_event<F>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    fetcher: &F,
    event: AppEvent,
) -> Result<()>
where
    F: Fetcher + ?Sized,
{
    debug!(?event, "handling event");
    match event {
        AppEvent::RecordSelected(selection) => {
            draw(terminal, app)?;
            let config = app.config.clone();
            DetailPresenter::new(fetcher, &config)
                .present(&selection, &mut app.modal)
                .await;
            app.status_message.clear();
        }
        AppEvent::Refresh => reload(terminal, app, fetcher).await?,
    }
    Ok(())
}

/// Run the main application event loop
pub async fn run<F>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    fetcher: &F,
    mut events: UnboundedReceiver<AppEvent>,
) -> Result<()>
where
    F: Fetcher + ?Sized,
{
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    reload(terminal, app, fetcher).await?;
    info!("initial load finished");

    while app.running {
        draw(terminal, app)?;

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    draw(terminal, app)?;
                }
                _ => {
                    // Ignore non-key events for now
                }
            }
        }

        // Queued events are handled one at a time, in order
        while let Ok(event) = events.try_recv() {
            handle_event(terminal, app, fetcher, event).await?;
        }
    }

    Ok(())
}
