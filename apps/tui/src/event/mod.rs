// Event module for multiverse
// Runs the terminal loop and the headless renderer

mod loop_handler;

pub use loop_handler::{run, run_headless, HeadlessOptions};

use multiverse_tui::render::Selection;

/// Messages queued by input handlers and drained by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A card was activated; show its details.
    RecordSelected(Selection),
    /// Discard everything and run the load sequence again.
    Refresh,
}
