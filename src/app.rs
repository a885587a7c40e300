//! HTTP router assembly.

use crate::blog::handlers::{
    handle_add_post, handle_by_author, handle_by_category, handle_create_category,
    handle_edit_post, handle_get_post, handle_index, handle_list_categories,
};
use crate::config::Settings;
use crate::feed::handlers::handle_load_more;
use crate::render::html::HtmlRenderer;
use crate::search::handlers::{SEARCH_PATH, handle_search};
use crate::storage::memory::BlogStore;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn router(store: Arc<BlogStore>, settings: Settings) -> Router {
    let renderer = Arc::new(HtmlRenderer::new(store.clone()));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/blog/", get(handle_index))
        .route(SEARCH_PATH, get(handle_search))
        .route("/blog/load_more/", post(handle_load_more))
        .route("/blog/add/", post(handle_add_post))
        .route(
            "/blog/categories/",
            get(handle_list_categories).post(handle_create_category),
        )
        .route("/blog/author/:id/", get(handle_by_author))
        .route("/blog/category/:id/", get(handle_by_category))
        .route("/blog/edit/:id/", post(handle_edit_post))
        .route("/blog/:id/", get(handle_get_post))
        .layer(Extension(store))
        .layer(Extension(renderer))
        .layer(Extension(Arc::new(settings)))
}
