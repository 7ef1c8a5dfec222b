use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            app.clamp_selection();
        }
        KeyCode::Char(ch) => {
            app.search_query.push(ch);
            app.set_selected_index(0);
        }
        _ => {}
    }
}
