//! Fixed-size pagination over an already ordered result set.
//!
//! Page numbers are 1-based. There is always at least one page, so an empty
//! result set still has a (blank) page 1.

use std::num::IntErrorKind;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PageError {
    #[error("page number {0:?} is not an integer")]
    NotAnInteger(String),
    #[error("page {0} is out of range")]
    OutOfRange(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub num_pages: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn next_page_number(&self) -> Option<usize> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub struct Paginator<T> {
    items: Vec<T>,
    per_page: usize,
}

impl<T> Paginator<T> {
    pub fn new(items: Vec<T>, per_page: usize) -> Self {
        Self {
            items,
            per_page: per_page.max(1),
        }
    }

    pub fn num_pages(&self) -> usize {
        self.items.len().div_ceil(self.per_page).max(1)
    }

    /// Returns page `number`, or an error if it lies outside `1..=num_pages`.
    pub fn page(self, number: usize) -> Result<Page<T>, PageError> {
        if number == 0 || number > self.num_pages() {
            return Err(PageError::OutOfRange(number));
        }
        Ok(self.slice(number))
    }

    /// Returns page `number`, pulled into `1..=num_pages`.
    pub fn page_clamped(self, number: usize) -> Page<T> {
        let number = number.clamp(1, self.num_pages());
        self.slice(number)
    }

    fn slice(self, number: usize) -> Page<T> {
        let num_pages = self.num_pages();
        let total_count = self.items.len();
        let items = self
            .items
            .into_iter()
            .skip((number - 1) * self.per_page)
            .take(self.per_page)
            .collect();

        Page {
            items,
            number,
            num_pages,
            total_count,
        }
    }
}

/// Parses a positive page number, tolerating surrounding whitespace.
///
/// A well-formed number too large for `usize` saturates to `usize::MAX`, so
/// it still reads as "past the end" rather than as garbage.
pub fn parse_page_number(raw: &str) -> Result<usize, PageError> {
    let trimmed = raw.trim();
    match trimmed.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        Ok(number) => Err(PageError::OutOfRange(number)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow && is_unsigned_digits(trimmed) => {
            Ok(usize::MAX)
        }
        Err(_) => Err(PageError::NotAnInteger(raw.to_string())),
    }
}

fn is_unsigned_digits(text: &str) -> bool {
    let digits = text.strip_prefix('+').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
