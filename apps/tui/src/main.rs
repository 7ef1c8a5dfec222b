mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use tokio::sync::mpsc;

use multiverse_tui::config::{debug_enabled, get_log_file, init_api_config};
use multiverse_tui::fetch::HttpFetcher;
use multiverse_tui::logging::{init_logging, LogTarget};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_api_config()?;
    let fetcher = HttpFetcher::new(&config)?;
    let debug = debug_enabled();

    // Check if we're running in a terminal
    if args.wants_headless() || !is_terminal() {
        init_logging(&LogTarget::Stderr, debug)?;
        return event::run_headless(&fetcher, &config, &args.headless_options()).await;
    }

    init_logging(&LogTarget::File(get_log_file()), debug)?;

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, events_tx);

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app, &fetcher, events_rx).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
