use super::repository::{FeedScope, PostRepository, sort_newest_first};
use crate::blog::types::{
    Category, CategoryForm, CategoryId, Post, PostForm, PostId, User, UserId,
};
use crate::search::predicate::{SearchField, SearchPredicate, Searchable};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("post {0} does not exist")]
    PostNotFound(PostId),
    #[error("user {0} does not exist")]
    UserNotFound(UserId),
    #[error("category {0} does not exist")]
    UnknownCategory(CategoryId),
}

/// Process-local store for users, categories and posts.
///
/// Each table is a `DashMap` so request handlers can read and write
/// concurrently through a shared `Arc<BlogStore>`.
pub struct BlogStore {
    users: DashMap<UserId, User>,
    categories: DashMap<CategoryId, Category>,
    posts: DashMap<PostId, Post>,
    next_user_id: AtomicU64,
    next_category_id: AtomicU64,
    next_post_id: AtomicU64,
}

impl BlogStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            categories: DashMap::new(),
            posts: DashMap::new(),
            next_user_id: AtomicU64::new(1),
            next_category_id: AtomicU64::new(1),
            next_post_id: AtomicU64::new(1),
        }
    }

    pub fn create_user(&self, username: &str, is_privileged: bool) -> User {
        let id = UserId(self.next_user_id.fetch_add(1, Ordering::SeqCst));
        let user = User {
            id,
            username: username.to_string(),
            is_privileged,
        };
        self.users.insert(id, user.clone());
        tracing::debug!("Created user {} ({})", id, username);
        user
    }

    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.users.get(&id).map(|entry| entry.value().clone())
    }

    pub fn create_category(&self, form: CategoryForm) -> Category {
        let id = CategoryId(self.next_category_id.fetch_add(1, Ordering::SeqCst));
        let category = Category {
            id,
            title: form.title.trim().to_string(),
            description: form.description.filter(|d| !d.trim().is_empty()),
            created_at: Utc::now(),
        };
        self.categories.insert(id, category.clone());
        category
    }

    pub fn get_category(&self, id: CategoryId) -> Option<Category> {
        self.categories.get(&id).map(|entry| entry.value().clone())
    }

    pub fn list_categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        categories.sort_by_key(|category| category.id);
        categories
    }

    /// Categories attached to `post`, in id order. Dangling ids are skipped.
    pub fn categories_of(&self, post: &Post) -> Vec<Category> {
        post.categories
            .iter()
            .filter_map(|id| self.get_category(*id))
            .collect()
    }

    pub fn create_post(&self, owner: UserId, form: PostForm) -> Result<Post, StoreError> {
        self.create_post_at(owner, form, Utc::now())
    }

    /// Same as [`BlogStore::create_post`] with an explicit creation time.
    pub fn create_post_at(
        &self,
        owner: UserId,
        form: PostForm,
        created_at: DateTime<Utc>,
    ) -> Result<Post, StoreError> {
        if !self.users.contains_key(&owner) {
            return Err(StoreError::UserNotFound(owner));
        }
        self.check_categories(&form.categories)?;

        let id = PostId(self.next_post_id.fetch_add(1, Ordering::SeqCst));
        let post = Post {
            id,
            title: form.title.trim().to_string(),
            body: form.body,
            categories: form.categories.into_iter().collect(),
            owner,
            published: form.published,
            created_at,
        };
        self.posts.insert(id, post.clone());
        tracing::info!("Stored post {} (published={})", id, post.published);
        Ok(post)
    }

    /// Replaces the editable fields of a post; `owner` and `created_at` are kept.
    pub fn update_post(&self, id: PostId, form: PostForm) -> Result<Post, StoreError> {
        self.check_categories(&form.categories)?;

        let mut entry = self
            .posts
            .get_mut(&id)
            .ok_or(StoreError::PostNotFound(id))?;
        let post = entry.value_mut();
        post.title = form.title.trim().to_string();
        post.body = form.body;
        post.categories = form.categories.into_iter().collect();
        post.published = form.published;

        Ok(post.clone())
    }

    pub fn get_post(&self, id: PostId) -> Option<Post> {
        self.posts.get(&id).map(|entry| entry.value().clone())
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    fn check_categories(&self, ids: &[CategoryId]) -> Result<(), StoreError> {
        match ids.iter().find(|id| !self.categories.contains_key(id)) {
            Some(missing) => Err(StoreError::UnknownCategory(*missing)),
            None => Ok(()),
        }
    }

    fn published_where(&self, keep: impl Fn(&Post) -> bool) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|entry| entry.value().published && keep(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        sort_newest_first(&mut posts);
        posts
    }

    fn document<'a>(&self, post: &'a Post) -> PostDocument<'a> {
        PostDocument {
            post,
            author_name: self.get_user(post.owner).map(|user| user.username),
            category_titles: self
                .categories_of(post)
                .into_iter()
                .map(|category| category.title)
                .collect(),
        }
    }
}

impl Default for BlogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostRepository for BlogStore {
    fn feed(&self, scope: &FeedScope) -> Vec<Post> {
        self.published_where(|post| scope.admits(post))
    }

    fn search(&self, predicate: &SearchPredicate) -> Vec<Post> {
        self.published_where(|post| predicate.matches(&self.document(post)))
    }
}

/// A post joined with the related values its searchable fields read from.
pub struct PostDocument<'a> {
    pub post: &'a Post,
    pub author_name: Option<String>,
    pub category_titles: Vec<String>,
}

impl Searchable for PostDocument<'_> {
    fn field_values(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Title => vec![self.post.title.as_str()],
            SearchField::Body => vec![self.post.body.as_str()],
            SearchField::AuthorName => self.author_name.as_deref().into_iter().collect(),
            SearchField::CategoryTitle => {
                self.category_titles.iter().map(String::as_str).collect()
            }
        }
    }
}
