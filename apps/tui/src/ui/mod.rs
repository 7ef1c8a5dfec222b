// UI module for multiverse
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::browse::render_browse(app, f);

    if let Some(notification) = &app.modal {
        screens::detail::render_detail_popup(notification, f);
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}
