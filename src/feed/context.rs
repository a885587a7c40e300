use crate::blog::types::{CategoryId, UserId};
use crate::storage::repository::FeedScope;

/// Works out which listing a "load more" request extends from the page URL
/// it was sent from.
///
/// Listing URLs end in `/<type>/<id>/`, so the id is the second-to-last path
/// segment and the type the third-to-last. Anything that does not name an
/// author or category with a numeric id is the global feed.
pub fn scope_from_referrer(url: Option<&str>) -> FeedScope {
    let Some(url) = url else {
        return FeedScope::Global;
    };

    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 3 {
        return FeedScope::Global;
    }

    let item_id = segments[segments.len() - 2];
    let page_type = segments[segments.len() - 3];

    match page_type {
        "author" => item_id
            .parse::<UserId>()
            .map(FeedScope::Author)
            .unwrap_or_default(),
        "category" => item_id
            .parse::<CategoryId>()
            .map(FeedScope::Category)
            .unwrap_or_default(),
        _ => FeedScope::Global,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_listing() {
        assert_eq!(
            scope_from_referrer(Some("/blog/author/5/")),
            FeedScope::Author(UserId(5))
        );
    }

    #[test]
    fn test_category_listing_with_full_url_and_query() {
        assert_eq!(
            scope_from_referrer(Some("http://localhost:8000/blog/category/12/?page=2")),
            FeedScope::Category(CategoryId(12))
        );
    }

    #[test]
    fn test_index_and_search_pages_are_global() {
        assert_eq!(scope_from_referrer(Some("/blog/")), FeedScope::Global);
        assert_eq!(scope_from_referrer(Some("/blog/search/")), FeedScope::Global);
    }

    #[test]
    fn test_malformed_referrers_fall_back_to_global() {
        assert_eq!(scope_from_referrer(None), FeedScope::Global);
        assert_eq!(scope_from_referrer(Some("")), FeedScope::Global);
        assert_eq!(scope_from_referrer(Some("/")), FeedScope::Global);
        assert_eq!(scope_from_referrer(Some("/blog/author/abc/")), FeedScope::Global);
        assert_eq!(scope_from_referrer(Some("/blog/author/")), FeedScope::Global);
        assert_eq!(scope_from_referrer(Some("/blog/tag/3/")), FeedScope::Global);
    }

    #[test]
    fn test_missing_trailing_slash_shifts_segments() {
        // "/blog/author/5" has "author" second-to-last, so no scope is found.
        assert_eq!(scope_from_referrer(Some("/blog/author/5")), FeedScope::Global);
    }
}
