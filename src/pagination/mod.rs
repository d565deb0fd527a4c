//! Pagination module
//!
//! Supports: Page Number
//!
//! # Overview
//!
//! JSON:API pagination is a contract ([`JsonApiPagination`]) that yields the
//! `first`, `last`, `next` and `prev` links and a metadata block, and assembles
//! them with a page of records into a [`PaginatedResponse`]. The page-number
//! strategy derives its links by rewriting the page query parameter of the
//! current request URL.

mod strategies;
mod types;

pub use strategies::{resolve_page_number, resolve_page_size, PageNumberMeta, PageNumberPagination};
pub use types::{JsonApiPagination, PaginatedResponse, PaginationLinks, ResponseMeta};

#[cfg(test)]
mod tests;
