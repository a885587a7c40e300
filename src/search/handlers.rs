use super::engine::search;
use super::types::SearchParams;
use crate::config::Settings;
use crate::error::Result;
use crate::feed::listing::{ListingRequest, render_listing_page};
use crate::render::html::HtmlRenderer;
use crate::storage::memory::BlogStore;

use axum::extract::Query;
use axum::response::Html;
use axum::Extension;
use std::sync::Arc;

pub const SEARCH_PATH: &str = "/blog/search/";

/// `GET /blog/search/?q=...`
///
/// A missing or blank `q` shows every published post. Results page through
/// `?page=` links only; load-more cannot rebuild a filtered feed.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<BlogStore>>,
    Extension(renderer): Extension<Arc<HtmlRenderer>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<Html<String>> {
    let query = params.q.unwrap_or_default();
    let results = search(
        &query,
        &settings.search_fields,
        settings.match_policy,
        &*store,
    );
    tracing::info!("Search {:?} matched {} posts", query, results.len());

    let carried = (!query.trim().is_empty()).then(|| format!("q={}", urlencoding::encode(&query)));

    render_listing_page(
        &*renderer,
        results,
        settings.page_size(),
        ListingRequest {
            title: "Search",
            url: SEARCH_PATH,
            query: carried.as_deref(),
            page: params.page.as_deref(),
            load_more: false,
        },
    )
}
