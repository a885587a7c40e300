use super::{FragmentRenderer, Listing};
use crate::blog::types::{Category, Post};
use crate::storage::memory::BlogStore;

use std::fmt::Write;
use std::sync::Arc;

const EXCERPT_CHARS: usize = 280;

/// Client side of the load-more endpoint: posts `page` and `url`, appends the
/// returned fragment and advances or hides the link.
const LOAD_MORE_SCRIPT: &str = r#"(function () {
  var link = document.getElementById('loadMoreLink');
  if (!link) { return; }
  link.addEventListener('click', function (event) {
    event.preventDefault();
    var page = parseInt(link.dataset.page, 10);
    var body = new URLSearchParams({ page: String(page), url: link.dataset.url });
    fetch('/blog/load_more/', { method: 'POST', body: body })
      .then(function (response) { return response.json(); })
      .then(function (data) {
        document.getElementById('posts').insertAdjacentHTML('beforeend', data.posts_html);
        if (data.has_next) {
          link.dataset.page = String(page + 1);
        } else {
          link.style.display = 'none';
          var pagination = document.querySelector('.pagination');
          if (pagination) { pagination.style.display = 'none'; }
        }
      })
      .catch(function () {});
  });
}());"#;

pub struct HtmlRenderer {
    store: Arc<BlogStore>,
}

impl HtmlRenderer {
    pub fn new(store: Arc<BlogStore>) -> Self {
        Self { store }
    }

    fn render_post(&self, out: &mut String, post: &Post) {
        let author = self
            .store
            .get_user(post.owner)
            .map(|user| user.username)
            .unwrap_or_else(|| "unknown".to_string());
        let categories = category_list(&self.store.categories_of(post));

        let _ = write!(
            out,
            "<article class=\"post\" id=\"post-{id}\">\
             <h2><a href=\"/blog/{id}/\">{title}</a></h2>\
             <p class=\"meta\">By <a href=\"/blog/author/{owner}/\">{author}</a> \
             on {date}",
            id = post.id,
            title = html_escape(&post.title),
            owner = post.owner,
            author = html_escape(&author),
            date = post.created_at.format("%B %-d, %Y"),
        );
        if !categories.is_empty() {
            let _ = write!(out, " in {}", categories);
        }
        let _ = write!(
            out,
            "</p><div class=\"post-body\">{}</div></article>",
            html_escape(&excerpt(&post.body))
        );
    }
}

impl FragmentRenderer for HtmlRenderer {
    fn render_posts(&self, posts: &[Post]) -> String {
        let mut out = String::new();
        for post in posts {
            self.render_post(&mut out, post);
        }
        out
    }

    fn render_listing(&self, listing: &Listing<'_>) -> String {
        let page = listing.page;
        let title = html_escape(listing.title);
        let query_suffix = listing
            .query
            .map(|q| format!("&{}", q))
            .unwrap_or_default();

        let mut out = String::new();
        let _ = write!(
            out,
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title></head>\
             <body><h1>{title}</h1>",
        );

        if page.is_empty() {
            out.push_str("<p class=\"empty\">No posts yet.</p>");
        }
        let _ = write!(out, "<div id=\"posts\">{}</div>", self.render_posts(&page.items));

        if let Some(next) = page.next_page_number().filter(|_| listing.load_more) {
            let _ = write!(
                out,
                "<a id=\"loadMoreLink\" href=\"#\" data-page=\"{}\" data-url=\"{}\">Load more</a>",
                next,
                html_escape(listing.url)
            );
        }

        if page.num_pages > 1 {
            out.push_str("<nav class=\"pagination\">");
            if page.has_previous() {
                let _ = write!(
                    out,
                    "<a href=\"?page={}{}\">Previous</a> ",
                    page.number - 1,
                    html_escape(&query_suffix)
                );
            }
            let _ = write!(out, "<span>Page {} of {}</span>", page.number, page.num_pages);
            if let Some(next) = page.next_page_number() {
                let _ = write!(
                    out,
                    " <a href=\"?page={}{}\">Next</a>",
                    next,
                    html_escape(&query_suffix)
                );
            }
            out.push_str("</nav>");
        }

        let _ = write!(out, "<script>{}</script></body></html>", LOAD_MORE_SCRIPT);
        out
    }
}

/// Comma-separated category links, or an empty string when there are none.
pub fn category_list(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|category| {
            format!(
                "<a href=\"/blog/category/{}/\">{}</a>",
                category.id,
                html_escape(&category.title)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}
