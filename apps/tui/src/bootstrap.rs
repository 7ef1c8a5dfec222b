use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::domain::Category;
use crate::fetch::Fetcher;
use crate::render::Document;
use crate::views::render_category;

/// Render characters, locations and episodes one after another, then open the
/// first tab so a panel is visible.
pub async fn bootstrap<F>(fetcher: &F, config: &ApiConfig, doc: &mut Document)
where
    F: Fetcher + ?Sized,
{
    info!(base_url = %config.base_url, "loading all views");

    for category in Category::ALL {
        render_category(category, fetcher, config, doc).await;
    }

    if let Err(e) = doc.tabs.activate_first() {
        warn!(error = %e, "no tab to activate");
    }
}
