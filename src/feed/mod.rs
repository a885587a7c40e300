//! Feed Module
//!
//! Paginated views over published posts and the "load more" endpoint that
//! extends them without reloading the page.
//!
//! ## Submodules
//! - **`context`**: Recovers the feed scope (global, author, category) from a referring URL.
//! - **`paginator`**: Fixed-size, 1-based pagination with strict and clamped lookups.
//! - **`fetcher`**: `IncrementalPageFetcher`, which rebuilds a feed and serves one rendered page.
//! - **`listing`**: Page selection and rendering shared by the full listing pages.
//! - **`handlers`**: The load-more HTTP handler.
//! - **`types`**: Request and response bodies.

pub mod context;
pub mod fetcher;
pub mod handlers;
pub mod listing;
pub mod paginator;
pub mod types;

#[cfg(test)]
mod tests;
