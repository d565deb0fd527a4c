//! Paginator: page arithmetic over a collection of known size

use super::types::Page;
use crate::error::{Error, Result};
use std::ops::Range;

/// Page arithmetic for a collection of `count` items split into pages of
/// `per_page` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: u64,
    per_page: u32,
    orphans: u32,
    allow_empty_first_page: bool,
}

impl Paginator {
    /// Create a paginator. A `per_page` of zero is treated as one.
    pub fn new(count: u64, per_page: u32) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
            orphans: 0,
            allow_empty_first_page: true,
        }
    }

    /// Merge a trailing page of at most `orphans` items into the previous page
    #[must_use]
    pub fn with_orphans(mut self, orphans: u32) -> Self {
        self.orphans = orphans;
        self
    }

    /// Whether page 1 of an empty collection is valid
    #[must_use]
    pub fn with_allow_empty_first_page(mut self, allow: bool) -> Self {
        self.allow_empty_first_page = allow;
        self
    }

    /// Total number of items
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Items per page
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Orphan threshold
    pub fn orphans(&self) -> u32 {
        self.orphans
    }

    /// Total number of pages; zero for an empty collection
    pub fn num_pages(&self) -> u64 {
        if self.count == 0 {
            return 0;
        }
        let hits = self.count.saturating_sub(self.orphans as u64).max(1);
        hits.div_ceil(self.per_page as u64)
    }

    /// Parse and validate a raw page number taken from a query string.
    ///
    /// Integral floats such as `"2.0"` are accepted.
    pub fn validate_number(&self, raw: &str) -> Result<u64> {
        let raw = raw.trim();
        let number = match raw.parse::<i64>() {
            Ok(n) => n,
            Err(_) => match raw.parse::<f64>() {
                Ok(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
                _ => return Err(Error::invalid_page("That page number is not an integer")),
            },
        };
        self.validate_page(number)
    }

    /// Validate a numeric page number against the page count
    pub fn validate_page(&self, number: i64) -> Result<u64> {
        if number < 1 {
            return Err(Error::invalid_page("That page number is less than 1"));
        }
        let number = number as u64;
        if number > self.num_pages() && !(number == 1 && self.allow_empty_first_page) {
            return Err(Error::invalid_page("That page contains no results"));
        }
        Ok(number)
    }

    /// Item range covered by a page number. A last page that would hold no
    /// more than `orphans` extra items absorbs them.
    pub fn bounds(&self, number: u64) -> Range<u64> {
        let per_page = self.per_page as u64;
        let bottom = number.saturating_sub(1).saturating_mul(per_page);
        let mut top = bottom.saturating_add(per_page);
        if top.saturating_add(self.orphans as u64) >= self.count {
            top = self.count;
        }
        bottom.min(top)..top
    }

    /// Slice page `number` out of an in-memory collection
    pub fn page<T: Clone>(&self, items: &[T], number: u64) -> Result<Page<T>> {
        let number = self.validate_page(i64::try_from(number).unwrap_or(i64::MAX))?;
        let range = self.bounds(number);
        let len = items.len();
        let start = usize::try_from(range.start).unwrap_or(len).min(len);
        let end = usize::try_from(range.end).unwrap_or(len).min(len);
        Ok(Page::new(number, items[start..end].to_vec(), *self))
    }
}
