use crate::app::state::App;
use crossterm::event::KeyCode;

mod browse;
mod detail;
mod help;
mod search;

/// Overlays take keys first: help, then the detail popup, then the search box.
pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.modal.is_some() {
        detail::handle_detail_input(app, key);
        return;
    }

    if app.search_active {
        search::handle_search_input(app, key);
        return;
    }

    browse::handle_browse_input(app, key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::AppEvent;
    use multiverse_tui::config::ApiConfig;
    use multiverse_tui::detail::Notification;
    use multiverse_tui::render::{Card, Field, RenderTarget};
    use multiverse_tui::Category;
    use tokio::sync::mpsc;

    fn app() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = App::new(ApiConfig::default(), tx);
        for (id, name) in [(1, "Earth (C-137)"), (2, "Abadango"), (3, "Citadel of Ricks")] {
            app.document.append_card(
                "locations-list",
                Card {
                    id: id.to_string(),
                    category: Category::Locations,
                    title: name.to_string(),
                    image: None,
                    fields: vec![Field::new("Type", "Planet")],
                    related_label: Some("Residents"),
                    related: Vec::new(),
                },
            );
        }
        app.open_tab(Category::Characters);
        (app, rx)
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            dispatch_input(app, *key);
        }
    }

    #[test]
    fn tab_keys_switch_panels() {
        let (mut app, _rx) = app();
        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.active_category(), Category::Locations);
        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.active_category(), Category::Episodes);
        press(&mut app, &[KeyCode::Left, KeyCode::Left]);
        assert_eq!(app.active_category(), Category::Characters);
        assert_eq!(app.document.tabs.active(), Some("characters"));
    }

    #[test]
    fn enter_selects_the_highlighted_card() {
        let (mut app, mut rx) = app();
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.selected_index(), 2);

        press(&mut app, &[KeyCode::Enter]);

        match rx.try_recv() {
            Ok(AppEvent::RecordSelected(selection)) => {
                assert_eq!(selection.category, Category::Locations);
                assert_eq!(selection.id, "3");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn search_box_narrows_and_escape_clears() {
        let (mut app, _rx) = app();
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('/')]);
        assert!(app.search_active);

        press(&mut app, &[KeyCode::Char('c'), KeyCode::Char('i'), KeyCode::Char('t')]);
        assert_eq!(app.visible_cards().len(), 1);
        // typing 'q' goes into the query instead of quitting
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.running);
        press(&mut app, &[KeyCode::Backspace, KeyCode::Enter]);
        assert!(!app.search_active);
        assert_eq!(app.search_query, "cit");

        press(&mut app, &[KeyCode::Esc]);
        assert!(app.search_query.is_empty());
        assert_eq!(app.visible_cards().len(), 3);
    }

    #[test]
    fn popup_swallows_keys_until_closed() {
        let (mut app, _rx) = app();
        app.modal = Some(Notification {
            title: "Location details".to_string(),
            lines: vec!["Location: Abadango".to_string()],
            failed: false,
        });

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.running);
        assert!(app.modal.is_none());

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.running);
    }

    #[test]
    fn refresh_key_queues_a_reload() {
        let (mut app, mut rx) = app();
        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(rx.try_recv().ok(), Some(AppEvent::Refresh));
    }
}
