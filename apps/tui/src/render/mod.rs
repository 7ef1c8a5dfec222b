//! Rendering targets for the view renderers.
//!
//! Renderers only see [`RenderTarget`]. [`Document`] is the in-memory target
//! shared by the terminal UI and the HTML exporter.

pub mod html;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::Category;
use crate::tabs::TabController;

/// Request to show the details of one record, emitted when a card is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub category: Category,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// A related entity embedded in a card (a resident, a cast member).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedEntry {
    pub id: String,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub image: Option<String>,
    pub fields: Vec<Field>,
    /// `Residents` or `Characters`; `None` for cards without relations.
    pub related_label: Option<&'static str>,
    pub related: Vec<RelatedEntry>,
}

impl Card {
    pub fn selection(&self) -> Selection {
        Selection {
            category: self.category,
            id: self.id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ContainerContent {
    Cards(Vec<Card>),
    Message(String),
}

impl Default for ContainerContent {
    fn default() -> Self {
        Self::Cards(Vec::new())
    }
}

impl ContainerContent {
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Cards(cards) => cards,
            Self::Message(_) => &[],
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            Self::Cards(_) => None,
        }
    }
}

/// What a view renderer needs from the surface it draws on.
pub trait RenderTarget {
    /// Drop whatever the container currently shows.
    fn clear(&mut self, container: &str);

    /// Append a card; its selection binding travels with it.
    fn append_card(&mut self, container: &str, card: Card);

    /// Replace the container's content with a single message.
    fn set_message(&mut self, container: &str, message: &str);
}

/// In-memory page: the three entity containers plus the tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    containers: BTreeMap<String, ContainerContent>,
    pub tabs: TabController,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let containers = Category::ALL
            .iter()
            .map(|c| (c.container().to_string(), ContainerContent::default()))
            .collect();

        Self {
            containers,
            tabs: TabController::for_categories(),
        }
    }

    pub fn content(&self, category: Category) -> &ContainerContent {
        static EMPTY: ContainerContent = ContainerContent::Cards(Vec::new());
        self.containers.get(category.container()).unwrap_or(&EMPTY)
    }

    pub fn cards(&self, category: Category) -> &[Card] {
        self.content(category).cards()
    }

    /// Selection binding of the card tagged `id`, if it is displayed.
    pub fn select(&self, category: Category, id: &str) -> Option<Selection> {
        self.cards(category)
            .iter()
            .find(|card| card.id == id)
            .map(Card::selection)
    }

    pub fn active_category(&self) -> Option<Category> {
        self.tabs.active().and_then(Category::parse)
    }
}

impl RenderTarget for Document {
    fn clear(&mut self, container: &str) {
        self.containers
            .insert(container.to_string(), ContainerContent::default());
    }

    fn append_card(&mut self, container: &str, card: Card) {
        let content = self.containers.entry(container.to_string()).or_default();
        match content {
            ContainerContent::Cards(cards) => cards.push(card),
            ContainerContent::Message(_) => *content = ContainerContent::Cards(vec![card]),
        }
    }

    fn set_message(&mut self, container: &str, message: &str) {
        self.containers.insert(
            container.to_string(),
            ContainerContent::Message(message.to_string()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            category: Category::Characters,
            title: format!("Card {id}"),
            image: None,
            fields: vec![Field::new("Status", "Alive")],
            related_label: None,
            related: Vec::new(),
        }
    }

    #[test]
    fn clear_then_append_replaces_previous_pass() {
        let mut doc = Document::new();
        doc.append_card("characters-list", card("1"));
        doc.clear("characters-list");
        doc.append_card("characters-list", card("2"));

        let ids: Vec<&str> = doc
            .cards(Category::Characters)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn message_replaces_cards() {
        let mut doc = Document::new();
        doc.append_card("characters-list", card("1"));
        doc.set_message("characters-list", "Unable to load characters data.");

        assert!(doc.cards(Category::Characters).is_empty());
        assert_eq!(
            doc.content(Category::Characters).message(),
            Some("Unable to load characters data.")
        );
    }

    #[test]
    fn select_only_known_cards() {
        let mut doc = Document::new();
        doc.append_card("characters-list", card("7"));

        assert_eq!(
            doc.select(Category::Characters, "7"),
            Some(Selection {
                category: Category::Characters,
                id: "7".to_string()
            })
        );
        assert_eq!(doc.select(Category::Characters, "8"), None);
        assert_eq!(doc.select(Category::Episodes, "7"), None);
    }
}
