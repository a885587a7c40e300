use super::types::SearchTerm;
use regex::Regex;
use std::sync::LazyLock;

/// A double-quoted phrase, or else a bare run of non-whitespace.
/// An unmatched quote never opens a phrase; it stays part of the bare token.
static TERM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"|(\S+)"#).expect("Invalid term regex"));

static SPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("Invalid whitespace regex"));

/// Splits a raw query into ordered search terms.
///
/// Quoted phrases become a single term. Every term is trimmed and has inner
/// whitespace runs collapsed to one space. Terms that end up empty (a quoted
/// run of pure whitespace) are dropped. No case folding or de-duplication.
pub fn normalize_query(query: &str) -> Vec<SearchTerm> {
    TERM_REGEX
        .captures_iter(query)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| SPACE_RUN_REGEX.replace_all(m.as_str().trim(), " ").into_owned())
        .filter(|term| !term.is_empty())
        .map(SearchTerm)
        .collect()
}
