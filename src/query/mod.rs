//! Query string module
//!
//! URL query-parameter rewriting and the request context links are built from.
//!
//! # Overview
//!
//! Links are produced by taking the absolute URL of the current request and
//! setting a single query parameter on it. Parsing goes through the `url`
//! crate so encoding, repeated parameters, and fragments survive the rewrite.

mod params;
mod request;

pub use params::{query_param, remove_query_param, replace_query_param};
pub use request::RequestContext;
