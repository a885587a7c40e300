//! Storage Module
//!
//! Keeps users, categories and posts in memory and answers the feed and
//! search queries the rest of the service needs.
//!
//! ## Core Concepts
//! - **`PostRepository`**: The read contract (scoped feeds, predicate search). Both only
//!   return published posts, newest first.
//! - **`BlogStore`**: `DashMap`-backed implementation shared across handlers via `Arc`.
//! - **Seeding**: Optional demo content for local runs.

pub mod memory;
pub mod repository;
pub mod seed;
