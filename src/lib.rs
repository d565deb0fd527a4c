//! # jsonapi-pagination
//!
//! JSON:API page-number pagination for Rust web services: navigation links,
//! pagination metadata, and the response envelope that carries them.
//!
//! ## Features
//!
//! - **JSON:API links**: `first`, `last`, `next` and `prev`, always present, `null` when absent
//! - **Metadata**: `page`, `pages` and `count` under `meta.pagination`
//! - **Page slicing**: orphans, `?page=last`, client page size capped by `max_page_size`
//! - **URL rewriting**: only the page parameter changes; other parameters keep their order
//! - **axum integration**: the envelope and errors are `IntoResponse`
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_pagination::config::PaginationSettings;
//! use jsonapi_pagination::pagination::{JsonApiPagination, PageNumberPagination};
//! use jsonapi_pagination::query::RequestContext;
//!
//! let records: Vec<u32> = (1..=25).collect();
//! let request = RequestContext::new("https://api.example.com/articles?page=2");
//!
//! let pagination =
//!     PageNumberPagination::paginate(&PaginationSettings::default(), &records, Some(&request))?;
//! let response = pagination.into_response()?;
//!
//! assert_eq!(response.meta.pagination.pages, 3);
//! assert_eq!(
//!     response.links.next.as_deref(),
//!     Some("https://api.example.com/articles?page=3")
//! );
//! # Ok::<(), jsonapi_pagination::Error>(())
//! ```
//!
//! ## Envelope
//!
//! ```text
//! {
//!   "results": [ ... ],
//!   "meta": { "pagination": { "page": 2, "pages": 3, "count": 25 } },
//!   "links": { "first": "...?page=1", "last": "...?page=3", "next": "...?page=3", "prev": "..." }
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Application and pagination settings
pub mod config;

/// Page slicing
pub mod page;

/// Query parameter rewriting and request context
pub mod query;

/// JSON:API pagination contract and strategies
pub mod pagination;

/// HTTP response adapters
pub mod response;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use config::{AppConfig, PaginationSettings};
pub use pagination::{
    JsonApiPagination, PageNumberMeta, PageNumberPagination, PaginatedResponse, PaginationLinks,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
