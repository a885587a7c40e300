use super::paginator::{Page, Paginator, parse_page_number};
use crate::blog::types::Post;
use crate::error::{AppError, Result};
use crate::render::{FragmentRenderer, Listing};

use axum::response::Html;

/// Picks the requested page of a full listing. Unlike load-more, a bad page
/// number here is a 404: missing means page 1, `last` means the last page.
pub fn select_page(posts: Vec<Post>, page_size: usize, raw: Option<&str>) -> Result<Page<Post>> {
    let paginator = Paginator::new(posts, page_size);

    let number = match raw.map(str::trim) {
        None | Some("") => 1,
        Some("last") => paginator.num_pages(),
        Some(raw) => {
            parse_page_number(raw).map_err(|err| AppError::NotFound(err.to_string()))?
        }
    };

    paginator
        .page(number)
        .map_err(|err| AppError::NotFound(err.to_string()))
}

pub struct ListingRequest<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub query: Option<&'a str>,
    pub page: Option<&'a str>,
    pub load_more: bool,
}

pub fn render_listing_page(
    renderer: &dyn FragmentRenderer,
    posts: Vec<Post>,
    page_size: usize,
    request: ListingRequest<'_>,
) -> Result<Html<String>> {
    let page = select_page(posts, page_size, request.page)?;

    Ok(Html(renderer.render_listing(&Listing {
        title: request.title,
        page: &page,
        url: request.url,
        query: request.query,
        load_more: request.load_more,
    })))
}
