//! Pagination strategy implementations

use super::types::{JsonApiPagination, PaginatedResponse};
use crate::config::PaginationSettings;
use crate::error::Result;
use crate::page::{Page, Paginator};
use crate::query::{remove_query_param, replace_query_param, RequestContext};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ============================================================================
// Page Number Pagination
// ============================================================================

/// `meta.pagination` of the page-number strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNumberMeta {
    /// Current page number
    pub page: u64,
    /// Total number of pages
    pub pages: u64,
    /// Total number of records
    pub count: u64,
}

/// Page number pagination bound to one request and one page.
///
/// Links are the request URL with the page parameter rewritten:
/// - `?page=1` for `first`
/// - `?page=<pages>` for `last`
/// - the adjacent page numbers for `next` and `prev`, except that a `prev`
///   pointing at page 1 drops the page parameter instead
#[derive(Debug, Clone)]
pub struct PageNumberPagination<T> {
    settings: PaginationSettings,
    request: Option<RequestContext>,
    page: Page<T>,
}

impl<T> PageNumberPagination<T> {
    /// Bind a strategy to a page and (optionally) the request it answers
    pub fn new(settings: PaginationSettings, page: Page<T>, request: Option<RequestContext>) -> Self {
        Self {
            settings,
            request,
            page,
        }
    }

    /// The bound page
    pub fn page(&self) -> &Page<T> {
        &self.page
    }

    /// The bound request
    pub fn request(&self) -> Option<&RequestContext> {
        self.request.as_ref()
    }

    /// The settings in effect
    pub fn settings(&self) -> &PaginationSettings {
        &self.settings
    }

    /// Consume the strategy and return its page
    pub fn into_page(self) -> Page<T> {
        self.page
    }

    /// URL of page `index`, or `None` when there is no such page.
    ///
    /// Without a bound request the link is relative (`?page=N`).
    pub fn build_link(&self, index: Option<u64>) -> Result<Option<String>> {
        let Some(index) = index.filter(|&i| i > 0) else {
            return Ok(None);
        };
        replace_query_param(
            self.request_url(),
            &self.settings.page_query_param,
            &index.to_string(),
        )
        .map(Some)
    }

    /// Envelope with the page's own items as `results`
    pub fn into_response(self) -> Result<PaginatedResponse<T, PageNumberMeta>> {
        let links = self.pagination_links()?;
        let meta = self.pagination_meta();
        Ok(PaginatedResponse::new(self.page.into_items(), meta, links))
    }

    /// Absolute URL of the bound request; empty without one
    fn request_url(&self) -> &str {
        self.request
            .as_ref()
            .map_or("", RequestContext::absolute_url)
    }

    fn num_pages(&self) -> u64 {
        self.page.paginator().num_pages()
    }
}

impl<T: Clone> PageNumberPagination<T> {
    /// Resolve page size and page number from the request, slice the page
    /// out of `items`, and bind the strategy.
    pub fn paginate(
        settings: &PaginationSettings,
        items: &[T],
        request: Option<&RequestContext>,
    ) -> Result<Self> {
        let page_size = resolve_page_size(settings, request);
        let paginator = Paginator::new(items.len() as u64, page_size)
            .with_orphans(settings.orphans)
            .with_allow_empty_first_page(settings.allow_empty_first_page);
        let number = resolve_page_number(settings, request, &paginator)?;

        debug!(
            page = number,
            page_size,
            count = paginator.count(),
            pages = paginator.num_pages(),
            "Resolved page"
        );

        let page = paginator.page(items, number)?;
        Ok(Self::new(settings.clone(), page, request.cloned()))
    }
}

impl<T> JsonApiPagination for PageNumberPagination<T> {
    type Meta = PageNumberMeta;

    fn first_link(&self) -> Result<Option<String>> {
        self.build_link((self.num_pages() > 0).then_some(1))
    }

    fn last_link(&self) -> Result<Option<String>> {
        self.build_link(Some(self.num_pages()))
    }

    fn next_link(&self) -> Result<Option<String>> {
        self.build_link(self.page.next_page_number())
    }

    fn previous_link(&self) -> Result<Option<String>> {
        match self.page.previous_page_number() {
            Some(1) => remove_query_param(self.request_url(), &self.settings.page_query_param)
                .map(Some),
            other => self.build_link(other),
        }
    }

    fn pagination_meta(&self) -> PageNumberMeta {
        PageNumberMeta {
            page: self.page.number(),
            pages: self.num_pages(),
            count: self.page.paginator().count(),
        }
    }
}

/// Page size for a request: the page size query parameter when it holds a
/// positive integer (capped at `max_page_size`), the configured default
/// otherwise.
pub fn resolve_page_size(settings: &PaginationSettings, request: Option<&RequestContext>) -> u32 {
    let requested = settings
        .page_size_query_param
        .as_deref()
        .zip(request)
        .and_then(|(param, request)| request.query_param(param));

    let Some(raw) = requested else {
        return settings.page_size;
    };

    match raw.trim().parse::<u64>() {
        Ok(size) if size > 0 => {
            let cap = settings.max_page_size.unwrap_or(u32::MAX) as u64;
            size.min(cap) as u32
        }
        _ => {
            warn!(value = %raw, "Ignoring invalid page size");
            settings.page_size
        }
    }
}

/// Page number for a request: `1` when the page parameter is missing, the
/// last page for any of `last_page_strings`, the validated
/// parameter value otherwise.
pub fn resolve_page_number(
    settings: &PaginationSettings,
    request: Option<&RequestContext>,
    paginator: &Paginator,
) -> Result<u64> {
    let raw = request.and_then(|r| r.query_param(&settings.page_query_param));

    match raw {
        None => paginator.validate_page(1),
        Some(raw) if settings.last_page_strings.iter().any(|s| *s == raw) => {
            paginator.validate_page(paginator.num_pages().max(1) as i64)
        }
        Some(raw) => paginator.validate_number(&raw),
    }
}
