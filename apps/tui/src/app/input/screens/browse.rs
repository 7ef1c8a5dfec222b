use crate::app::state::App;
use crossterm::event::KeyCode;
use multiverse_tui::Category;

const PAGE: usize = 5;

pub fn handle_browse_input(app: &mut App, key: KeyCode) {
    let total_rows = app.visible_cards().len();

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Esc => {
            if !app.search_query.is_empty() {
                app.clear_search();
            }
        }
        KeyCode::Right | KeyCode::Tab => app.next_tab(),
        KeyCode::Left | KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char(ch @ '1'..='3') => {
            let index = (ch as usize) - ('1' as usize);
            if let Some(category) = Category::from_index(index) {
                app.open_tab(category);
            }
        }
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Enter => app.select_current(),
        KeyCode::Up => {
            let index = app.selected_index();
            if index > 0 {
                app.set_selected_index(index - 1);
            }
        }
        KeyCode::Down => {
            let index = app.selected_index();
            if total_rows > 0 && index + 1 < total_rows {
                app.set_selected_index(index + 1);
            }
        }
        KeyCode::PageUp => {
            let index = app.selected_index();
            app.set_selected_index(index.saturating_sub(PAGE));
        }
        KeyCode::PageDown => {
            if total_rows > 0 {
                let index = (app.selected_index() + PAGE).min(total_rows - 1);
                app.set_selected_index(index);
            }
        }
        KeyCode::Home => app.set_selected_index(0),
        KeyCode::End => {
            if total_rows > 0 {
                app.set_selected_index(total_rows - 1);
            }
        }
        _ => {}
    }
}
