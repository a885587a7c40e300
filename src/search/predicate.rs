//! Boolean match predicates over post fields.
//!
//! A predicate is a tree of `(field, term)` containment leaves joined with
//! AND / OR. Building one is pure; evaluating one needs a [`Searchable`]
//! view of a record, supplied by the storage layer.

use super::types::SearchTerm;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields a search term may be matched against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Body,
    /// The owner's username.
    AuthorName,
    /// Titles of the attached categories; any one of them may match.
    CategoryTitle,
}

impl SearchField {
    pub fn name(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Body => "body",
            SearchField::AuthorName => "author_name",
            SearchField::CategoryTitle => "category_title",
        }
    }
}

/// How per-field matches for several terms are combined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
pub enum MatchPolicy {
    /// Every term must appear in at least one field; terms may hit different fields.
    #[default]
    #[value(name = "any-field")]
    AnyFieldPerTerm,
    /// A single field must contain every term.
    #[value(name = "single-field")]
    SingleFieldAllTerms,
}

/// Read access to the text values behind each [`SearchField`].
pub trait Searchable {
    fn field_values(&self, field: SearchField) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPredicate {
    /// Case-insensitive substring test of `term` within `field`.
    Match { field: SearchField, term: SearchTerm },
    And(Vec<SearchPredicate>),
    Or(Vec<SearchPredicate>),
}

impl SearchPredicate {
    pub fn leaf(field: SearchField, term: &SearchTerm) -> Self {
        SearchPredicate::Match {
            field,
            term: term.clone(),
        }
    }

    /// Conjunction of `children`; a single child is returned as-is.
    pub fn all(children: impl IntoIterator<Item = SearchPredicate>) -> Self {
        let mut children: Vec<SearchPredicate> = children.into_iter().collect();
        if children.len() == 1 {
            return children.remove(0);
        }
        SearchPredicate::And(children)
    }

    /// Disjunction of `children`; a single child is returned as-is.
    pub fn any(children: impl IntoIterator<Item = SearchPredicate>) -> Self {
        let mut children: Vec<SearchPredicate> = children.into_iter().collect();
        if children.len() == 1 {
            return children.remove(0);
        }
        SearchPredicate::Or(children)
    }

    pub fn matches(&self, record: &impl Searchable) -> bool {
        match self {
            SearchPredicate::Match { field, term } => {
                let needle = term.as_str().to_lowercase();
                record
                    .field_values(*field)
                    .iter()
                    .any(|value| value.to_lowercase().contains(&needle))
            }
            SearchPredicate::And(children) => children.iter().all(|c| c.matches(record)),
            SearchPredicate::Or(children) => children.iter().any(|c| c.matches(record)),
        }
    }

    /// Number of `(field, term)` leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            SearchPredicate::Match { .. } => 1,
            SearchPredicate::And(children) | SearchPredicate::Or(children) => {
                children.iter().map(SearchPredicate::leaf_count).sum()
            }
        }
    }
}

impl fmt::Display for SearchPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (children, joiner) = match self {
            SearchPredicate::Match { field, term } => {
                return write!(f, "{} ~ {:?}", field.name(), term.as_str());
            }
            SearchPredicate::And(children) => (children, " AND "),
            SearchPredicate::Or(children) => (children, " OR "),
        };
        write!(f, "(")?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                f.write_str(joiner)?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, ")")
    }
}

/// Combines `terms` across `fields` according to `policy`.
///
/// Returns `None` when there is nothing to match on; callers then serve the
/// unfiltered listing.
pub fn build_predicate(
    terms: &[SearchTerm],
    fields: &[SearchField],
    policy: MatchPolicy,
) -> Option<SearchPredicate> {
    if terms.is_empty() || fields.is_empty() {
        return None;
    }

    let predicate = match policy {
        MatchPolicy::AnyFieldPerTerm => SearchPredicate::all(terms.iter().map(|term| {
            SearchPredicate::any(fields.iter().map(|field| SearchPredicate::leaf(*field, term)))
        })),
        MatchPolicy::SingleFieldAllTerms => SearchPredicate::any(fields.iter().map(|field| {
            SearchPredicate::all(terms.iter().map(|term| SearchPredicate::leaf(*field, term)))
        })),
    };

    Some(predicate)
}
