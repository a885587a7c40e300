use serde::{Deserialize, Serialize};

/// Form body of a "load more" request. Both fields are optional; missing or
/// malformed values fall back to defaults instead of being rejected.
#[derive(Debug, Default, Deserialize)]
pub struct LoadMoreForm {
    pub page: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LoadMoreResponse {
    pub posts_html: String,
    pub has_next: bool,
}

/// `?page=` on the full listing pages.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}
