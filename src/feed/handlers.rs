use super::context::scope_from_referrer;
use super::fetcher::IncrementalPageFetcher;
use super::types::{LoadMoreForm, LoadMoreResponse};
use crate::config::Settings;
use crate::render::html::HtmlRenderer;
use crate::storage::memory::BlogStore;

use axum::{Extension, Form, Json};
use std::sync::Arc;

/// `POST /blog/load_more/`
///
/// Open to anonymous callers and never rejects input: a missing or
/// unreadable form is treated as an empty one.
pub async fn handle_load_more(
    Extension(store): Extension<Arc<BlogStore>>,
    Extension(renderer): Extension<Arc<HtmlRenderer>>,
    Extension(settings): Extension<Arc<Settings>>,
    form: Option<Form<LoadMoreForm>>,
) -> Json<LoadMoreResponse> {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let scope = scope_from_referrer(form.url.as_deref());

    let fetcher = IncrementalPageFetcher::new(
        &*store,
        &*renderer,
        settings.page_size(),
        settings.fallback_page,
    );

    Json(fetcher.fetch(&scope, form.page.as_deref()))
}
