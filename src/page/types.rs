//! Page type

use super::paginator::Paginator;

/// One page of a paginated collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    number: u64,
    items: Vec<T>,
    paginator: Paginator,
}

impl<T> Page<T> {
    /// Create a page. `number` is 1-based.
    pub fn new(number: u64, items: Vec<T>, paginator: Paginator) -> Self {
        Self {
            number,
            items,
            paginator,
        }
    }

    /// 1-based page number
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Items on this page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page and return its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The paginator this page was sliced from
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a page follows this one
    pub fn has_next(&self) -> bool {
        self.number < self.paginator.num_pages()
    }

    /// Whether a page precedes this one
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Number of the following page, if any
    pub fn next_page_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }

    /// Number of the preceding page, if any
    pub fn previous_page_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }

    /// 1-based index of the first item on this page; 0 for an empty collection
    pub fn start_index(&self) -> u64 {
        if self.paginator.count() == 0 {
            return 0;
        }
        self.paginator.bounds(self.number).start + 1
    }

    /// 1-based index of the last item on this page
    pub fn end_index(&self) -> u64 {
        self.paginator.bounds(self.number).end
    }
}
