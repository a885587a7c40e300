use super::predicate::{MatchPolicy, SearchField, build_predicate};
use super::tokenizer::normalize_query;
use crate::blog::types::Post;
use crate::storage::repository::{FeedScope, PostRepository};

/// Published posts matching `query`, newest first.
///
/// A query with no usable terms (empty, whitespace only) returns the whole
/// published feed. No ranking is applied.
pub fn search(
    query: &str,
    fields: &[SearchField],
    policy: MatchPolicy,
    repository: &dyn PostRepository,
) -> Vec<Post> {
    let terms = normalize_query(query);

    match build_predicate(&terms, fields, policy) {
        Some(predicate) => {
            tracing::debug!(
                "Search with {} terms over {} leaves: {}",
                terms.len(),
                predicate.leaf_count(),
                predicate
            );
            repository.search(&predicate)
        }
        None => {
            tracing::debug!("Search without terms, serving the full feed");
            repository.feed(&FeedScope::Global)
        }
    }
}
