//! Blog Module
//!
//! Posts, categories and authors, plus the pages and edit endpoints around them.
//!
//! ## Rules
//! - Only published posts appear in listings; an unpublished post is visible
//!   on its own page to its author and to administrators only.
//! - A post may be edited by its author or by an administrator.
//!
//! ## Submodules
//! - **`types`**: Domain records and request/response bodies.
//! - **`permissions`**: Resolves the calling `Principal` and answers view/edit checks.
//! - **`handlers`**: Listing pages, single post, add/edit and category endpoints.

pub mod handlers;
pub mod permissions;
pub mod types;
