//! Search Module
//!
//! Free-text search over published posts.
//!
//! ## Overview
//! A raw query is split into terms, the terms are combined into a boolean
//! predicate over the configured fields, and the storage layer filters
//! published posts with it. Results keep the feed order (newest first); there
//! is no relevance ranking.
//!
//! ## Submodules
//! - **`tokenizer`**: Splits a query into terms, keeping quoted phrases together.
//! - **`predicate`**: Field enum, match policies and the predicate tree.
//! - **`engine`**: Runs a query against a `PostRepository`.
//! - **`handlers`**: The search page handler.
//! - **`types`**: `SearchTerm` and request parameters.

pub mod engine;
pub mod handlers;
pub mod predicate;
pub mod tokenizer;
pub mod types;
