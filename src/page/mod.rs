//! Page slicing module
//!
//! Splits an ordered collection into fixed-size, 1-based pages.
//!
//! # Overview
//!
//! A [`Paginator`] knows the total item count and page size and answers how
//! many pages there are and which items belong to a page. A [`Page`] is one
//! such slice together with the paginator it came from.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::Page;
