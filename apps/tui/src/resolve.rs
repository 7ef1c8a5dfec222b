use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::domain::{Category, Listing};
use crate::fetch::{fetch_data, Fetcher};

/// Fetch every entity in `ids` with a single `?ids=` request.
///
/// An empty set resolves to an empty collection without touching the network.
/// `None` means the request failed; the failure has already been logged.
pub async fn batch_resolve<T, F>(
    fetcher: &F,
    config: &ApiConfig,
    category: Category,
    ids: &BTreeSet<String>,
) -> Option<Vec<T>>
where
    T: DeserializeOwned,
    F: Fetcher + ?Sized,
{
    if ids.is_empty() {
        debug!(category = category.as_str(), "nothing to resolve");
        return Some(Vec::new());
    }

    let url = config.batch_url(category, ids);
    fetch_data::<Listing<T>, F>(fetcher, &url)
        .await
        .map(|listing| listing.results)
}
