//! Feed Module Tests
//!
//! Validates the "load more" fetcher against a populated store.
//!
//! ## Test Scopes
//! - **Page selection**: Fallback page, clamping, explicit pages.
//! - **Scopes**: Global, author and category feeds, published-only.
//! - **Listing pages**: Strict page selection for full pages.

#[cfg(test)]
mod tests {
    use crate::blog::types::{CategoryForm, CategoryId, Post, PostForm, UserId};
    use crate::error::AppError;
    use crate::feed::context::scope_from_referrer;
    use crate::feed::fetcher::IncrementalPageFetcher;
    use crate::feed::listing::select_page;
    use crate::render::{FragmentRenderer, Listing};
    use crate::storage::memory::BlogStore;
    use crate::storage::repository::{FeedScope, PostRepository};
    use chrono::{Duration, Utc};

    /// Renders each post as `[title]` so tests can see exactly which posts were served.
    struct TitleRenderer;

    impl FragmentRenderer for TitleRenderer {
        fn render_posts(&self, posts: &[Post]) -> String {
            posts.iter().map(|p| format!("[{}]", p.title)).collect()
        }

        fn render_listing(&self, listing: &Listing<'_>) -> String {
            self.render_posts(&listing.page.items)
        }
    }

    /// `count` published posts titled `post 1` (oldest) to `post N` (newest).
    fn store_with_published(count: usize) -> (BlogStore, UserId) {
        let store = BlogStore::new();
        let author = store.create_user("author", false);
        let start = Utc::now();
        for i in 1..=count {
            store
                .create_post_at(
                    author.id,
                    PostForm {
                        title: format!("post {}", i),
                        body: String::new(),
                        categories: vec![],
                        published: true,
                    },
                    start + Duration::seconds(i as i64),
                )
                .unwrap();
        }
        (store, author.id)
    }

    fn fetcher<'a>(store: &'a BlogStore) -> IncrementalPageFetcher<'a> {
        IncrementalPageFetcher::new(store, &TitleRenderer, 3, 2)
    }

    // ============================================================
    // PAGE SELECTION
    // ============================================================

    #[test]
    fn test_empty_feed_has_no_next_page() {
        let store = BlogStore::new();

        let response = fetcher(&store).fetch(&FeedScope::Global, None);

        assert_eq!(response.posts_html, "");
        assert!(!response.has_next);
    }

    #[test]
    fn test_missing_page_falls_back_to_page_two() {
        let (store, _) = store_with_published(7);

        let response = fetcher(&store).fetch(&FeedScope::Global, None);

        // Newest first: page 1 is posts 7..5, page 2 is posts 4..2.
        assert_eq!(response.posts_html, "[post 4][post 3][post 2]");
        assert!(response.has_next);
    }

    #[test]
    fn test_invalid_page_falls_back_to_page_two() {
        let (store, _) = store_with_published(7);

        for raw in ["", "abc", "0", "-3", "1.5"] {
            let response = fetcher(&store).fetch(&FeedScope::Global, Some(raw));
            assert_eq!(response.posts_html, "[post 4][post 3][post 2]", "page {:?}", raw);
        }
    }

    #[test]
    fn test_page_past_end_is_clamped_to_last() {
        let (store, _) = store_with_published(6);

        let response = fetcher(&store).fetch(&FeedScope::Global, Some("999"));

        assert_eq!(response.posts_html, "[post 3][post 2][post 1]");
        assert!(!response.has_next);
    }

    #[test]
    fn test_page_beyond_usize_is_clamped_to_last() {
        let (store, _) = store_with_published(9);

        let huge = fetcher(&store).fetch(&FeedScope::Global, Some("99999999999999999999999"));
        let large = fetcher(&store).fetch(&FeedScope::Global, Some("999"));

        assert_eq!(huge.posts_html, "[post 3][post 2][post 1]");
        assert_eq!(huge, large);
        assert!(!huge.has_next);
    }

    #[test]
    fn test_explicit_page() {
        let (store, _) = store_with_published(7);

        let third = fetcher(&store).fetch(&FeedScope::Global, Some("3"));
        assert_eq!(third.posts_html, "[post 1]");
        assert!(!third.has_next);

        let first = fetcher(&store).fetch(&FeedScope::Global, Some("1"));
        assert_eq!(first.posts_html, "[post 7][post 6][post 5]");
        assert!(first.has_next);
    }

    #[test]
    fn test_fallback_page_on_single_page_feed_is_clamped() {
        let (store, _) = store_with_published(2);

        let response = fetcher(&store).fetch(&FeedScope::Global, None);

        assert_eq!(response.posts_html, "[post 2][post 1]");
        assert!(!response.has_next);
    }

    #[test]
    fn test_configured_fallback_page() {
        let (store, _) = store_with_published(7);
        let first_page = IncrementalPageFetcher::new(&store, &TitleRenderer, 3, 1);

        let response = first_page.fetch(&FeedScope::Global, None);
        assert_eq!(response.posts_html, "[post 7][post 6][post 5]");
    }

    // ============================================================
    // SCOPES
    // ============================================================

    fn mixed_store() -> (BlogStore, UserId, UserId, CategoryId) {
        let store = BlogStore::new();
        let alice = store.create_user("alice", false);
        let bob = store.create_user("bob", false);
        let music = store.create_category(CategoryForm {
            title: "Music".to_string(),
            description: None,
        });
        let start = Utc::now();

        let rows = [
            (alice.id, "alice music", vec![music.id], true),
            (alice.id, "alice plain", vec![], true),
            (bob.id, "bob music", vec![music.id], true),
            (bob.id, "bob hidden music", vec![music.id], false),
            (alice.id, "alice hidden", vec![], false),
        ];
        for (i, (owner, title, categories, published)) in rows.into_iter().enumerate() {
            store
                .create_post_at(
                    owner,
                    PostForm {
                        title: title.to_string(),
                        body: String::new(),
                        categories,
                        published,
                    },
                    start + Duration::seconds(i as i64),
                )
                .unwrap();
        }
        (store, alice.id, bob.id, music.id)
    }

    #[test]
    fn test_author_scope_from_referrer() {
        let (store, alice, _, _) = mixed_store();
        let url = format!("/blog/author/{}/", alice);

        let response = fetcher(&store).fetch(&scope_from_referrer(Some(&url)), Some("1"));

        assert_eq!(response.posts_html, "[alice plain][alice music]");
        assert!(!response.has_next);
    }

    #[test]
    fn test_category_scope_from_referrer() {
        let (store, _, _, music) = mixed_store();
        let url = format!("/blog/category/{}/", music);

        let response = fetcher(&store).fetch(&scope_from_referrer(Some(&url)), Some("1"));

        assert_eq!(response.posts_html, "[bob music][alice music]");
    }

    #[test]
    fn test_malformed_referrer_serves_global_feed() {
        let (store, _, _, _) = mixed_store();

        let response = fetcher(&store).fetch(&scope_from_referrer(Some("garbage")), Some("1"));

        assert_eq!(response.posts_html, "[bob music][alice plain][alice music]");
    }

    #[test]
    fn test_unpublished_never_in_any_scope() {
        let (store, alice, bob, music) = mixed_store();

        for scope in [
            FeedScope::Global,
            FeedScope::Author(alice),
            FeedScope::Author(bob),
            FeedScope::Category(music),
        ] {
            assert!(store.feed(&scope).iter().all(|p| p.published), "{:?}", scope);
        }
    }

    // ============================================================
    // LISTING PAGES
    // ============================================================

    #[test]
    fn test_listing_page_defaults_to_first() {
        let (store, _) = store_with_published(4);

        let page = select_page(store.feed(&FeedScope::Global), 3, None).unwrap();
        assert_eq!(page.number, 1);
        assert!(page.has_next());
    }

    #[test]
    fn test_listing_page_last_keyword() {
        let (store, _) = store_with_published(4);

        let page = select_page(store.feed(&FeedScope::Global), 3, Some("last")).unwrap();
        assert_eq!(page.number, 2);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_listing_page_rejects_bad_numbers() {
        let (store, _) = store_with_published(4);

        for raw in ["3", "0", "abc"] {
            let result = select_page(store.feed(&FeedScope::Global), 3, Some(raw));
            assert!(matches!(result, Err(AppError::NotFound(_))), "page {:?}", raw);
        }
    }
}
