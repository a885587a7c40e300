use super::permissions::Principal;
use super::types::{
    Category, CategoryForm, CategoryId, Post, PostCreatedResponse, PostDetail, PostForm, PostId,
    UserId,
};
use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::feed::listing::{ListingRequest, render_listing_page};
use crate::feed::types::PageParams;
use crate::render::html::HtmlRenderer;
use crate::storage::memory::BlogStore;
use crate::storage::repository::{FeedScope, PostRepository};

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Html;
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /blog/`
pub async fn handle_index(
    Query(params): Query<PageParams>,
    Extension(store): Extension<Arc<BlogStore>>,
    Extension(renderer): Extension<Arc<HtmlRenderer>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<Html<String>> {
    render_listing_page(
        &*renderer,
        store.feed(&FeedScope::Global),
        settings.page_size(),
        ListingRequest {
            title: "Blog",
            url: "/blog/",
            query: None,
            page: params.page.as_deref(),
            load_more: true,
        },
    )
}

/// `GET /blog/author/:id/`
pub async fn handle_by_author(
    Path(id): Path<String>,
    Query(params): Query<PageParams>,
    Extension(store): Extension<Arc<BlogStore>>,
    Extension(renderer): Extension<Arc<HtmlRenderer>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<Html<String>> {
    let author = id
        .parse::<UserId>()
        .ok()
        .and_then(|id| store.get_user(id))
        .ok_or_else(|| AppError::NotFound(format!("author {}", id)))?;

    let title = format!("Blog Posts By {}", author.username);
    let url = format!("/blog/author/{}/", author.id);

    render_listing_page(
        &*renderer,
        store.feed(&FeedScope::Author(author.id)),
        settings.page_size(),
        ListingRequest {
            title: &title,
            url: &url,
            query: None,
            page: params.page.as_deref(),
            load_more: true,
        },
    )
}

/// `GET /blog/category/:id/`
pub async fn handle_by_category(
    Path(id): Path<String>,
    Query(params): Query<PageParams>,
    Extension(store): Extension<Arc<BlogStore>>,
    Extension(renderer): Extension<Arc<HtmlRenderer>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<Html<String>> {
    let category = id
        .parse::<CategoryId>()
        .ok()
        .and_then(|id| store.get_category(id))
        .ok_or_else(|| AppError::NotFound(format!("category {}", id)))?;

    let title = format!("Blog Posts in {}", category.title);
    let url = format!("/blog/category/{}/", category.id);

    render_listing_page(
        &*renderer,
        store.feed(&FeedScope::Category(category.id)),
        settings.page_size(),
        ListingRequest {
            title: &title,
            url: &url,
            query: None,
            page: params.page.as_deref(),
            load_more: true,
        },
    )
}

/// `GET /blog/:id/`
///
/// Unpublished posts are reported as missing to everyone but their editors.
pub async fn handle_get_post(
    Path(id): Path<String>,
    headers: HeaderMap,
    Extension(store): Extension<Arc<BlogStore>>,
) -> Result<Json<PostDetail>> {
    let principal = Principal::from_headers(&headers, &store);
    let post = find_post(&store, &id)?;

    if !principal.can_view(&post) {
        return Err(AppError::NotFound(format!("post {}", id)));
    }

    Ok(Json(PostDetail {
        author: store.get_user(post.owner),
        categories: store.categories_of(&post),
        is_owner: principal.owns(&post),
        post,
    }))
}

/// `POST /blog/add/`
pub async fn handle_add_post(
    headers: HeaderMap,
    Extension(store): Extension<Arc<BlogStore>>,
    Json(form): Json<PostForm>,
) -> Result<(StatusCode, Json<PostCreatedResponse>)> {
    let principal = Principal::from_headers(&headers, &store);
    let owner = principal
        .user_id()
        .ok_or_else(|| AppError::Unauthorized("login required to add a post".to_string()))?;

    form.validate().map_err(AppError::BadRequest)?;
    let post = store.create_post(owner, form)?;

    Ok((StatusCode::CREATED, Json(PostCreatedResponse { id: post.id })))
}

/// `POST /blog/edit/:id/`
pub async fn handle_edit_post(
    Path(id): Path<String>,
    headers: HeaderMap,
    Extension(store): Extension<Arc<BlogStore>>,
    Json(form): Json<PostForm>,
) -> Result<Json<Post>> {
    let principal = Principal::from_headers(&headers, &store);
    let post = find_post(&store, &id)?;

    if !principal.can_edit(&post) {
        return Err(AppError::Forbidden(format!(
            "post {} can only be edited by its author",
            post.id
        )));
    }

    form.validate().map_err(AppError::BadRequest)?;
    let updated = store.update_post(post.id, form)?;
    tracing::info!("Post {} edited by {:?}", updated.id, principal.user_id());

    Ok(Json(updated))
}

/// `GET /blog/categories/`
pub async fn handle_list_categories(
    Extension(store): Extension<Arc<BlogStore>>,
) -> Json<Vec<Category>> {
    Json(store.list_categories())
}

/// `POST /blog/categories/`
pub async fn handle_create_category(
    headers: HeaderMap,
    Extension(store): Extension<Arc<BlogStore>>,
    Json(form): Json<CategoryForm>,
) -> Result<(StatusCode, Json<Category>)> {
    let principal = Principal::from_headers(&headers, &store);
    if !principal.is_privileged() {
        return Err(AppError::Forbidden(
            "only administrators can manage categories".to_string(),
        ));
    }
    if form.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }

    Ok((StatusCode::CREATED, Json(store.create_category(form))))
}

fn find_post(store: &BlogStore, raw_id: &str) -> Result<Post> {
    raw_id
        .parse::<PostId>()
        .ok()
        .and_then(|id| store.get_post(id))
        .ok_or_else(|| AppError::NotFound(format!("post {}", raw_id)))
}
