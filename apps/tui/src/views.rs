use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::domain::{Category, Character, Episode, Listing, Location};
use crate::fetch::{fetch_data, Fetcher};
use crate::ids::{extract_ids, trailing_id};
use crate::render::{Card, Field, RelatedEntry, RenderTarget};
use crate::resolve::batch_resolve;

pub async fn render_category<F, T>(
    category: Category,
    fetcher: &F,
    config: &ApiConfig,
    target: &mut T,
) where
    F: Fetcher + ?Sized,
    T: RenderTarget + ?Sized,
{
    match category {
        Category::Characters => render_characters(fetcher, config, target).await,
        Category::Locations => render_locations(fetcher, config, target).await,
        Category::Episodes => render_episodes(fetcher, config, target).await,
    }
}

pub async fn render_characters<F, T>(fetcher: &F, config: &ApiConfig, target: &mut T)
where
    F: Fetcher + ?Sized,
    T: RenderTarget + ?Sized,
{
    let category = Category::Characters;
    let Some(listing) = load_listing::<Character, _, _>(category, fetcher, config, target).await
    else {
        return;
    };

    for character in &listing.results {
        target.append_card(category.container(), character_card(character));
    }
    info!(count = listing.results.len(), "rendered characters");
}

pub async fn render_locations<F, T>(fetcher: &F, config: &ApiConfig, target: &mut T)
where
    F: Fetcher + ?Sized,
    T: RenderTarget + ?Sized,
{
    let category = Category::Locations;
    let Some(listing) = load_listing::<Location, _, _>(category, fetcher, config, target).await
    else {
        return;
    };

    let resident_ids = extract_ids(listing.results.iter().flat_map(|l| &l.residents));
    let residents = resolve_characters(fetcher, config, &resident_ids, category).await;

    for location in &listing.results {
        let card = Card {
            id: location.id.to_string(),
            category,
            title: location.name.clone(),
            image: None,
            fields: vec![
                Field::new("Type", &location.kind),
                Field::new("Dimension", &location.dimension),
            ],
            related_label: Some("Residents"),
            related: related_entries(&location.residents, &residents),
        };
        target.append_card(category.container(), card);
    }
    info!(
        count = listing.results.len(),
        residents = residents.len(),
        "rendered locations"
    );
}

pub async fn render_episodes<F, T>(fetcher: &F, config: &ApiConfig, target: &mut T)
where
    F: Fetcher + ?Sized,
    T: RenderTarget + ?Sized,
{
    let category = Category::Episodes;
    let Some(listing) = load_listing::<Episode, _, _>(category, fetcher, config, target).await
    else {
        return;
    };

    let cast_ids = extract_ids(listing.results.iter().flat_map(|e| &e.characters));
    let cast = resolve_characters(fetcher, config, &cast_ids, category).await;

    for episode in &listing.results {
        let card = Card {
            id: episode.id.to_string(),
            category,
            title: episode.name.clone(),
            image: None,
            fields: vec![
                Field::new("Air Date", &episode.air_date),
                Field::new("Episode", &episode.episode),
            ],
            related_label: Some("Characters"),
            related: related_entries(&episode.characters, &cast),
        };
        target.append_card(category.container(), card);
    }
    info!(
        count = listing.results.len(),
        characters = cast.len(),
        "rendered episodes"
    );
}

/// Clears the container and fetches the primary listing, leaving the fixed
/// "unable to load" message behind when the listing is unavailable.
async fn load_listing<R, F, T>(
    category: Category,
    fetcher: &F,
    config: &ApiConfig,
    target: &mut T,
) -> Option<Listing<R>>
where
    R: serde::de::DeserializeOwned,
    F: Fetcher + ?Sized,
    T: RenderTarget + ?Sized,
{
    let container = category.container();
    target.clear(container);

    let listing = fetch_data::<Listing<R>, F>(fetcher, &config.endpoint(category)).await;
    if listing.is_none() {
        target.set_message(container, &category.unavailable_message());
    }
    listing
}

async fn resolve_characters<F>(
    fetcher: &F,
    config: &ApiConfig,
    ids: &BTreeSet<String>,
    for_category: Category,
) -> Vec<Character>
where
    F: Fetcher + ?Sized,
{
    batch_resolve(fetcher, config, Category::Characters, ids)
        .await
        .unwrap_or_else(|| {
            warn!(
                category = for_category.as_str(),
                requested = ids.len(),
                "related characters unavailable, rendering cards without them"
            );
            Vec::new()
        })
}

pub fn character_card(character: &Character) -> Card {
    Card {
        id: character.id.to_string(),
        category: Category::Characters,
        title: character.name.clone(),
        image: Some(character.image.clone()).filter(|image| !image.is_empty()),
        fields: vec![
            Field::new("Status", &character.status),
            Field::new("Species", &character.species),
            Field::new("Origin", &character.origin.name),
            Field::new("Location", &character.location.name),
        ],
        related_label: None,
        related: Vec::new(),
    }
}

/// Resolved characters whose identifier appears in `refs`, in resolved order.
pub fn related_entries(refs: &[String], resolved: &[Character]) -> Vec<RelatedEntry> {
    let wanted: BTreeSet<&str> = refs.iter().filter_map(|url| trailing_id(url)).collect();

    resolved
        .iter()
        .filter(|character| wanted.contains(character.id.to_string().as_str()))
        .map(|character| RelatedEntry {
            id: character.id.to_string(),
            name: character.name.clone(),
            image: character.image.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Document;
    use crate::testing::{
        character_json, episode_json, listing, location_json, FakeFetcher, API,
    };

    fn config() -> ApiConfig {
        ApiConfig::new(API).unwrap_or_default()
    }

    fn card_ids(doc: &Document, category: Category) -> Vec<String> {
        doc.cards(category).iter().map(|c| c.id.clone()).collect()
    }

    #[tokio::test]
    async fn one_card_per_character() {
        let fetcher = FakeFetcher::new().respond(
            &format!("{API}/character"),
            listing(vec![
                character_json(1, "Rick Sanchez"),
                character_json(2, "Morty Smith"),
                character_json(3, "Summer Smith"),
            ]),
        );
        let mut doc = Document::new();

        render_characters(&fetcher, &config(), &mut doc).await;

        assert_eq!(card_ids(&doc, Category::Characters), vec!["1", "2", "3"]);
        let rick = &doc.cards(Category::Characters)[0];
        assert_eq!(rick.title, "Rick Sanchez");
        assert!(rick
            .fields
            .contains(&Field::new("Origin", "Earth (C-137)")));
        assert_eq!(
            rick.image.as_deref(),
            Some("http://api.test/character/avatar/1.jpeg")
        );
    }

    #[tokio::test]
    async fn failed_listing_shows_fixed_message() {
        let cases = [
            (Category::Characters, "character", "Unable to load characters data."),
            (Category::Locations, "location", "Unable to load locations data."),
            (Category::Episodes, "episode", "Unable to load episodes data."),
        ];

        for (category, path, expected) in cases {
            let fetcher = FakeFetcher::new().fail(&format!("{API}/{path}"), 500);
            let mut doc = Document::new();

            render_category(category, &fetcher, &config(), &mut doc).await;

            assert_eq!(doc.content(category).message(), Some(expected), "{path}");
            assert!(doc.cards(category).is_empty());
            assert_eq!(fetcher.requests().len(), 1);
        }
    }

    #[tokio::test]
    async fn locations_embed_only_their_own_residents() {
        let fetcher = FakeFetcher::new()
            .respond(
                &format!("{API}/location"),
                listing(vec![
                    location_json(1, "Earth (C-137)", &[1, 2]),
                    location_json(2, "Abadango", &[6]),
                    location_json(3, "Worldender's lair", &[]),
                ]),
            )
            .respond(
                &format!("{API}/character?ids=1,2,6"),
                listing(vec![
                    character_json(1, "Rick Sanchez"),
                    character_json(2, "Morty Smith"),
                    character_json(6, "Abadango Cluster Princess"),
                ]),
            );
        let mut doc = Document::new();

        render_locations(&fetcher, &config(), &mut doc).await;

        let cards = doc.cards(Category::Locations);
        assert_eq!(cards.len(), 3);
        let names = |i: usize| -> Vec<&str> {
            cards[i].related.iter().map(|r| r.name.as_str()).collect()
        };
        assert_eq!(names(0), vec!["Rick Sanchez", "Morty Smith"]);
        assert_eq!(names(1), vec!["Abadango Cluster Princess"]);
        assert!(names(2).is_empty());
        assert_eq!(fetcher.count(&format!("{API}/character?ids=1,2,6")), 1);
    }

    #[tokio::test]
    async fn episodes_without_cast_skip_the_batch_request() {
        let fetcher = FakeFetcher::new().respond(
            &format!("{API}/episode"),
            listing(vec![episode_json(1, "Pilot", &[]), episode_json(2, "Lawnmower Dog", &[])]),
        );
        let mut doc = Document::new();

        render_episodes(&fetcher, &config(), &mut doc).await;

        assert_eq!(card_ids(&doc, Category::Episodes), vec!["1", "2"]);
        assert_eq!(fetcher.requests(), vec![format!("{API}/episode")]);
        assert!(doc.cards(Category::Episodes)[0]
            .fields
            .contains(&Field::new("Episode", "S01E01")));
    }

    #[tokio::test]
    async fn failed_batch_still_renders_every_card() {
        let fetcher = FakeFetcher::new()
            .respond(
                &format!("{API}/episode"),
                listing(vec![episode_json(1, "Pilot", &[1, 2])]),
            )
            .fail(&format!("{API}/character?ids=1,2"), 502);
        let mut doc = Document::new();

        render_episodes(&fetcher, &config(), &mut doc).await;

        let cards = doc.cards(Category::Episodes);
        assert_eq!(cards.len(), 1);
        assert!(cards[0].related.is_empty());
    }

    #[tokio::test]
    async fn incomplete_records_still_get_cards() {
        let fetcher = FakeFetcher::new().respond(
            &format!("{API}/location"),
            listing(vec![
                location_json(1, "Earth (C-137)", &[]),
                serde_json::json!({"id": 2, "name": "Anatomy Park", "type": null}),
                serde_json::json!({"id": 3, "type": "Planet"}),
            ]),
        );
        let mut doc = Document::new();

        render_locations(&fetcher, &config(), &mut doc).await;

        assert_eq!(doc.content(Category::Locations).message(), None);
        assert_eq!(card_ids(&doc, Category::Locations), vec!["1", "2", "3"]);
        let cards = doc.cards(Category::Locations);
        assert!(cards[1].fields.contains(&Field::new("Type", "")));
        assert_eq!(cards[2].title, crate::domain::UNKNOWN_NAME);
    }

    #[tokio::test]
    async fn rerender_clears_previous_cards() {
        let fetcher = FakeFetcher::new().respond(
            &format!("{API}/character"),
            listing(vec![character_json(1, "Rick Sanchez")]),
        );
        let mut doc = Document::new();

        render_category(Category::Characters, &fetcher, &config(), &mut doc).await;
        render_category(Category::Characters, &fetcher, &config(), &mut doc).await;

        assert_eq!(card_ids(&doc, Category::Characters), vec!["1"]);
    }
}
