use serde::Serialize;
use tracing::info;

use crate::config::ApiConfig;
use crate::domain::{Category, Character, Episode, Location};
use crate::fetch::{fetch_data, Fetcher};
use crate::render::Selection;

/// Content of a detail popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub lines: Vec<String>,
    pub failed: bool,
}

impl Notification {
    fn failure(category: Category) -> Self {
        Self {
            title: format!("{} details", category.label()),
            lines: vec![category.detail_failure_message()],
            failed: true,
        }
    }

    /// All lines joined the way a plain alert box shows them.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Where notifications are shown. `show` must not wait for the user.
pub trait Modal {
    fn show(&mut self, notification: Notification);
}

impl Modal for Option<Notification> {
    fn show(&mut self, notification: Notification) {
        *self = Some(notification);
    }
}

pub struct DetailPresenter<'a, F: ?Sized> {
    fetcher: &'a F,
    config: &'a ApiConfig,
}

impl<'a, F> DetailPresenter<'a, F>
where
    F: Fetcher + ?Sized,
{
    pub const fn new(fetcher: &'a F, config: &'a ApiConfig) -> Self {
        Self { fetcher, config }
    }

    /// Fetch the selected record once and describe it.
    pub async fn resolve(&self, selection: &Selection) -> Notification {
        let url = self.config.entity_url(selection.category, &selection.id);
        info!(category = selection.category.as_str(), id = %selection.id, "showing details");

        let lines = match selection.category {
            Category::Characters => fetch_data::<Character, F>(self.fetcher, &url)
                .await
                .map(|c| character_lines(&c)),
            Category::Locations => fetch_data::<Location, F>(self.fetcher, &url)
                .await
                .map(|l| location_lines(&l)),
            Category::Episodes => fetch_data::<Episode, F>(self.fetcher, &url)
                .await
                .map(|e| episode_lines(&e)),
        };

        lines.map_or_else(
            || Notification::failure(selection.category),
            |lines| Notification {
                title: format!("{} details", selection.category.label()),
                lines,
                failed: false,
            },
        )
    }

    pub async fn present<M>(&self, selection: &Selection, modal: &mut M)
    where
        M: Modal + ?Sized,
    {
        let notification = self.resolve(selection).await;
        modal.show(notification);
    }
}

fn character_lines(character: &Character) -> Vec<String> {
    let mut lines = vec![
        format!("Character: {}", character.name),
        format!("Status: {}", character.status),
        format!("Species: {}", character.species),
        format!("Origin: {}", character.origin.name),
    ];
    if !character.gender.is_empty() {
        lines.push(format!("Gender: {}", character.gender));
    }
    if !character.kind.is_empty() {
        lines.push(format!("Type: {}", character.kind));
    }
    lines.push(format!("Episodes: {}", character.episode.len()));
    lines
}

fn location_lines(location: &Location) -> Vec<String> {
    vec![
        format!("Location: {}", location.name),
        format!("Type: {}", location.kind),
        format!("Dimension: {}", location.dimension),
        format!("Residents: {}", location.residents.len()),
    ]
}

fn episode_lines(episode: &Episode) -> Vec<String> {
    vec![
        format!("Episode: {}", episode.name),
        format!("Air Date: {}", episode.air_date),
        format!("Episode: {}", episode.episode),
        format!("Characters: {}", episode.characters.len()),
    ]
}
