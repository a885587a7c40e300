//! Caller identity and edit rights.
//!
//! The caller is identified by the `x-user-id` header. Anything that does not
//! name a known user is treated as anonymous; there is no error path here.

use super::types::{Post, User, UserId};
use crate::storage::memory::BlogStore;
use axum::http::HeaderMap;

pub const USER_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    Anonymous,
    User(User),
}

impl Principal {
    pub fn from_headers(headers: &HeaderMap, store: &BlogStore) -> Self {
        let user = headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| raw.trim().parse::<UserId>().ok())
            .and_then(|id| store.get_user(id));

        match user {
            Some(user) => Principal::User(user),
            None => Principal::Anonymous,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Principal::Anonymous => None,
            Principal::User(user) => Some(user.id),
        }
    }

    pub fn is_privileged(&self) -> bool {
        matches!(self, Principal::User(user) if user.is_privileged)
    }

    pub fn owns(&self, post: &Post) -> bool {
        self.user_id() == Some(post.owner)
    }

    /// Only the owner or a privileged user may modify a post.
    pub fn can_edit(&self, post: &Post) -> bool {
        self.is_privileged() || self.owns(post)
    }

    /// Unpublished posts are only visible to the same principals that may edit them.
    pub fn can_view(&self, post: &Post) -> bool {
        post.published || self.can_edit(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::types::PostId;
    use axum::http::HeaderValue;
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn post_owned_by(owner: u64, published: bool) -> Post {
        Post {
            id: PostId(1),
            title: "Test Post".to_string(),
            body: "Some Text".to_string(),
            categories: BTreeSet::new(),
            owner: UserId(owner),
            published,
            created_at: Utc::now(),
        }
    }

    fn user(id: u64, is_privileged: bool) -> Principal {
        Principal::User(User {
            id: UserId(id),
            username: format!("user{}", id),
            is_privileged,
        })
    }

    #[test]
    fn test_owner_can_edit() {
        assert!(user(7, false).can_edit(&post_owned_by(7, true)));
    }

    #[test]
    fn test_privileged_can_edit_any_post() {
        assert!(user(1, true).can_edit(&post_owned_by(7, true)));
    }

    #[test]
    fn test_other_user_cannot_edit() {
        assert!(!user(8, false).can_edit(&post_owned_by(7, true)));
    }

    #[test]
    fn test_anonymous_cannot_edit() {
        assert!(!Principal::Anonymous.can_edit(&post_owned_by(7, true)));
    }

    #[test]
    fn test_unpublished_visible_only_to_editors() {
        let hidden = post_owned_by(7, false);

        assert!(user(7, false).can_view(&hidden));
        assert!(user(1, true).can_view(&hidden));
        assert!(!user(8, false).can_view(&hidden));
        assert!(!Principal::Anonymous.can_view(&hidden));
    }

    #[test]
    fn test_from_headers_resolves_known_user() {
        let store = BlogStore::new();
        let author = store.create_user("author", false);

        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, HeaderValue::from_str(&author.id.to_string()).unwrap());

        assert_eq!(Principal::from_headers(&headers, &store), Principal::User(author));
    }

    #[test]
    fn test_from_headers_falls_back_to_anonymous() {
        let store = BlogStore::new();

        let mut headers = HeaderMap::new();
        assert_eq!(Principal::from_headers(&headers, &store), Principal::Anonymous);

        headers.insert(USER_HEADER, HeaderValue::from_static("not-a-number"));
        assert_eq!(Principal::from_headers(&headers, &store), Principal::Anonymous);

        headers.insert(USER_HEADER, HeaderValue::from_static("999"));
        assert_eq!(Principal::from_headers(&headers, &store), Principal::Anonymous);
    }
}
