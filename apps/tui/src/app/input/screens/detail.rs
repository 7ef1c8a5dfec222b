use crate::app::state::App;
use crossterm::event::KeyCode;

#[allow(clippy::missing_const_for_fn)]
pub fn handle_detail_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | ' ')) {
        app.modal = None;
        app.status_message.clear();
    }
}
