//! Pagination types and traits
//!
//! Defines the JSON:API pagination contract and the response envelope every
//! strategy produces.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The four JSON:API navigation links.
///
/// All four keys are always present; a link that does not apply serializes
/// as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    /// Link to the first page
    pub first: Option<String>,
    /// Link to the last page
    pub last: Option<String>,
    /// Link to the following page
    pub next: Option<String>,
    /// Link to the preceding page
    pub prev: Option<String>,
}

impl PaginationLinks {
    /// Whether no link is set
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.last.is_none() && self.next.is_none() && self.prev.is_none()
    }
}

/// The `meta` member of the envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta<M> {
    /// Strategy-specific pagination metadata
    pub pagination: M,
}

/// Paginated response envelope:
/// `{ "results": [...], "meta": { "pagination": {...} }, "links": {...} }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T, M> {
    /// Serialized records of the current page
    pub results: Vec<T>,
    /// Pagination metadata
    pub meta: ResponseMeta<M>,
    /// Navigation links
    pub links: PaginationLinks,
}

impl<T, M> PaginatedResponse<T, M> {
    /// Assemble an envelope
    pub fn new(results: Vec<T>, pagination: M, links: PaginationLinks) -> Self {
        Self {
            results,
            meta: ResponseMeta { pagination },
            links,
        }
    }
}

/// Contract every JSON:API pagination strategy satisfies.
///
/// JSON:API requires the `first`, `last`, `next` and `prev` keys in the
/// `links` section, so a strategy must answer all four, returning `None`
/// for links that do not apply to it.
///
/// See <https://jsonapi.org/format/#fetching-pagination>.
pub trait JsonApiPagination {
    /// Metadata placed under `meta.pagination`
    type Meta: Serialize;

    /// Link to the first page
    fn first_link(&self) -> Result<Option<String>>;

    /// Link to the last page
    fn last_link(&self) -> Result<Option<String>>;

    /// Link to the following page
    fn next_link(&self) -> Result<Option<String>>;

    /// Link to the preceding page
    fn previous_link(&self) -> Result<Option<String>>;

    /// Strategy-specific metadata
    fn pagination_meta(&self) -> Self::Meta;

    /// All four links, recomputed on every call
    fn pagination_links(&self) -> Result<PaginationLinks> {
        Ok(PaginationLinks {
            first: self.first_link()?,
            last: self.last_link()?,
            next: self.next_link()?,
            prev: self.previous_link()?,
        })
    }

    /// Wrap already-serialized records in the envelope
    fn paginated_response<D>(&self, data: Vec<D>) -> Result<PaginatedResponse<D, Self::Meta>> {
        Ok(PaginatedResponse::new(
            data,
            self.pagination_meta(),
            self.pagination_links()?,
        ))
    }
}
