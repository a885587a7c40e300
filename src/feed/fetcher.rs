use super::paginator::{Paginator, parse_page_number};
use super::types::LoadMoreResponse;
use crate::render::FragmentRenderer;
use crate::storage::repository::{FeedScope, PostRepository};

/// Serves the next page of a feed for the "load more" link.
///
/// The feed is rebuilt from scratch on every call, so posts written between
/// two calls may shift page boundaries.
pub struct IncrementalPageFetcher<'a> {
    repository: &'a dyn PostRepository,
    renderer: &'a dyn FragmentRenderer,
    page_size: usize,
    fallback_page: usize,
}

impl<'a> IncrementalPageFetcher<'a> {
    pub fn new(
        repository: &'a dyn PostRepository,
        renderer: &'a dyn FragmentRenderer,
        page_size: usize,
        fallback_page: usize,
    ) -> Self {
        Self {
            repository,
            renderer,
            page_size,
            fallback_page,
        }
    }

    /// Renders one page of `scope`.
    ///
    /// A missing or non-numeric `page` selects the fallback page; a page past
    /// the end selects the last page. Never fails.
    pub fn fetch(&self, scope: &FeedScope, page: Option<&str>) -> LoadMoreResponse {
        let requested = page
            .and_then(|raw| parse_page_number(raw).ok())
            .unwrap_or(self.fallback_page);

        let posts = self.repository.feed(scope);
        let page = Paginator::new(posts, self.page_size).page_clamped(requested);

        tracing::debug!(
            "Load more for {:?}: requested page {}, serving {} of {} ({} posts)",
            scope,
            requested,
            page.number,
            page.num_pages,
            page.total_count
        );

        LoadMoreResponse {
            posts_html: self.renderer.render_posts(&page.items),
            has_next: page.has_next(),
        }
    }
}
