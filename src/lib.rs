//! Blog Listing Service Library
//!
//! This library crate defines the modules behind the blog binary (`main.rs`).
//!
//! ## Architecture Modules
//! - **`blog`**: Domain records (posts, categories, users), permission checks and
//!   the page / edit handlers.
//! - **`search`**: Query tokenizer, predicate builder and the search page.
//! - **`feed`**: Pagination, referrer parsing and the "load more" fetcher.
//! - **`storage`**: In-memory store implementing the `PostRepository` read contract.
//! - **`render`**: HTML rendering of listings and post fragments.
//! - **`app`**, **`config`**, **`error`**: Router assembly, settings and HTTP errors.

pub mod app;
pub mod blog;
pub mod config;
pub mod error;
pub mod feed;
pub mod render;
pub mod search;
pub mod storage;
