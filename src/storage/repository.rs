//! Read-side contract the listing, search and "load more" paths depend on.

use crate::blog::types::{CategoryId, Post, UserId};
use crate::search::predicate::SearchPredicate;
use serde::{Deserialize, Serialize};

/// Which feed a listing shows. All scopes only ever contain published posts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FeedScope {
    #[default]
    Global,
    Author(UserId),
    Category(CategoryId),
}

impl FeedScope {
    pub fn admits(&self, post: &Post) -> bool {
        match self {
            FeedScope::Global => true,
            FeedScope::Author(owner) => post.owner == *owner,
            FeedScope::Category(category) => post.categories.contains(category),
        }
    }
}

pub trait PostRepository: Send + Sync {
    /// Published posts in `scope`, newest first.
    fn feed(&self, scope: &FeedScope) -> Vec<Post>;

    /// Published posts matching `predicate`, newest first.
    fn search(&self, predicate: &SearchPredicate) -> Vec<Post>;
}

/// Newest first; ids break ties so the order is total.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
