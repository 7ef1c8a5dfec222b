use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use multiverse_tui::config::ApiConfig;
use multiverse_tui::detail::Notification;
use multiverse_tui::render::{Card, Document};
use multiverse_tui::Category;

use crate::event::AppEvent;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub config: ApiConfig,
    pub document: Document,
    /// Selected row per category, indexed by `Category::index`.
    pub selected: [usize; 3],
    pub search_active: bool,
    pub search_query: String,
    pub modal: Option<Notification>,
    pub show_help: bool,
    pub loading: bool,
    pub status_message: String,
    events: UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(config: ApiConfig, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            running: true,
            config,
            document: Document::new(),
            selected: [0; 3],
            search_active: false,
            search_query: String::new(),
            modal: None,
            show_help: false,
            loading: false,
            status_message: String::new(),
            events,
        }
    }

    pub fn active_category(&self) -> Category {
        self.document
            .active_category()
            .unwrap_or(Category::Characters)
    }

    /// Cards of the active tab that match the search query, in listing order.
    pub fn visible_cards(&self) -> Vec<&Card> {
        let cards = self.document.cards(self.active_category());
        let query = self.search_query.trim();
        if query.is_empty() {
            return cards.iter().collect();
        }

        let matcher = SkimMatcherV2::default();
        cards
            .iter()
            .filter(|card| matcher.fuzzy_match(&card.title, query).is_some())
            .collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected[self.active_category().index()]
    }

    pub fn set_selected_index(&mut self, index: usize) {
        let slot = self.active_category().index();
        self.selected[slot] = index;
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.visible_cards().get(self.selected_index()).copied()
    }

    /// Keep the selection inside the visible rows after the list changed.
    pub fn clamp_selection(&mut self) {
        let total = self.visible_cards().len();
        let index = self.selected_index().min(total.saturating_sub(1));
        self.set_selected_index(index);
    }

    pub fn open_tab(&mut self, category: Category) {
        if let Err(e) = self.document.tabs.open(category.as_str()) {
            self.status_message = e.to_string();
            return;
        }
        self.clear_search();
    }

    pub fn next_tab(&mut self) {
        if self.document.tabs.next().is_ok() {
            self.clear_search();
        }
    }

    pub fn previous_tab(&mut self) {
        if self.document.tabs.previous().is_ok() {
            self.clear_search();
        }
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.clamp_selection();
    }

    /// Emit a selection event for the highlighted card.
    pub fn select_current(&mut self) {
        let Some(selection) = self
            .selected_card()
            .and_then(|card| self.document.select(card.category, &card.id))
        else {
            return;
        };
        self.status_message = format!(
            "Loading {} #{}...",
            selection.category.singular(),
            selection.id
        );
        self.send(AppEvent::RecordSelected(selection));
    }

    pub fn request_refresh(&mut self) {
        self.status_message = "Refreshing...".to_string();
        self.send(AppEvent::Refresh);
    }

    fn send(&self, event: AppEvent) {
        if self.events.send(event).is_err() {
            warn!("event loop is gone, dropping event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiverse_tui::render::{Field, RenderTarget};
    use tokio::sync::mpsc;

    pub fn card(category: Category, id: u32, title: &str) -> Card {
        Card {
            id: id.to_string(),
            category,
            title: title.to_string(),
            image: None,
            fields: vec![Field::new("Status", "Alive")],
            related_label: None,
            related: Vec::new(),
        }
    }

    fn app_with_characters() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = App::new(ApiConfig::default(), tx);
        for (id, name) in [(1, "Rick Sanchez"), (2, "Morty Smith"), (3, "Summer Smith")] {
            app.document
                .append_card("characters-list", card(Category::Characters, id, name));
        }
        app.open_tab(Category::Characters);
        (app, rx)
    }

    #[test]
    fn search_filters_visible_cards() {
        let (mut app, _rx) = app_with_characters();
        app.search_query = "smith".to_string();

        let titles: Vec<&str> = app.visible_cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Morty Smith", "Summer Smith"]);
    }

    #[test]
    fn clamp_keeps_selection_in_range() {
        let (mut app, _rx) = app_with_characters();
        app.set_selected_index(2);
        app.search_query = "rick".to_string();
        app.clamp_selection();
        assert_eq!(app.selected_index(), 0);
    }

    #[test]
    fn select_current_emits_event() {
        let (mut app, mut rx) = app_with_characters();
        app.set_selected_index(1);

        app.select_current();

        match rx.try_recv() {
            Ok(AppEvent::RecordSelected(selection)) => {
                assert_eq!(selection.category, Category::Characters);
                assert_eq!(selection.id, "2");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn empty_tab_emits_nothing() {
        let (mut app, mut rx) = app_with_characters();
        app.open_tab(Category::Episodes);

        app.select_current();
        assert!(rx.try_recv().is_err());
    }
}
