//! Markup rendering for post pages and "load more" fragments.
//!
//! - **`FragmentRenderer`**: the seam used by listing, search and load-more paths.
//! - **`html`**: the built-in HTML implementation backed by the blog store.

pub mod html;

use crate::blog::types::Post;
use crate::feed::paginator::Page;

/// A full listing page: a titled feed page plus the data its "load more" link needs.
pub struct Listing<'a> {
    pub title: &'a str,
    pub page: &'a Page<Post>,
    /// Path of the listing itself; sent back as `url` by the load-more link.
    pub url: &'a str,
    /// Extra query string carried on pagination links (e.g. `q=rust`).
    pub query: Option<&'a str>,
    /// Whether to offer the "load more" link. Only feeds the load-more
    /// endpoint can rebuild from `url` should set this.
    pub load_more: bool,
}

pub trait FragmentRenderer: Send + Sync {
    /// Renders an ordered page of posts. An empty slice renders to an empty string.
    fn render_posts(&self, posts: &[Post]) -> String;

    fn render_listing(&self, listing: &Listing<'_>) -> String;
}
