//! Runtime settings, read from the command line with environment fallbacks.

use crate::search::predicate::{MatchPolicy, SearchField};
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "blog-search", version, about = "Blog listing service with search and load-more")]
pub struct Settings {
    /// Address the HTTP server listens on.
    #[arg(long, env = "BLOG_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Posts per listing page and per load-more fragment.
    #[arg(long, env = "BLOG_PAGE_SIZE", default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: u16,

    /// Page served by load-more when the request carries no usable page number.
    #[arg(long, env = "BLOG_FALLBACK_PAGE", default_value_t = 2)]
    pub fallback_page: usize,

    /// How search terms are combined across fields.
    #[arg(long, env = "BLOG_MATCH_POLICY", value_enum, default_value_t = MatchPolicy::AnyFieldPerTerm)]
    pub match_policy: MatchPolicy,

    /// Fields searched by the search page.
    #[arg(
        long,
        env = "BLOG_SEARCH_FIELDS",
        value_enum,
        value_delimiter = ',',
        default_values_t = [SearchField::Title, SearchField::Body]
    )]
    pub search_fields: Vec<SearchField>,

    /// Populate the store with a few users, categories and posts on startup.
    #[arg(long, env = "BLOG_SEED_DEMO")]
    pub seed_demo: bool,
}

impl Settings {
    pub fn page_size(&self) -> usize {
        usize::from(self.page_size)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            page_size: 3,
            fallback_page: 2,
            match_policy: MatchPolicy::default(),
            search_fields: vec![SearchField::Title, SearchField::Body],
            seed_demo: false,
        }
    }
}
