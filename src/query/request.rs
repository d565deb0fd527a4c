//! Request context
//!
//! The part of an incoming request that pagination needs: its absolute URL.

use super::params;
use axum::http::{header, HeaderMap, Uri};

/// The current request as seen by a pagination strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    url: String,
}

impl RequestContext {
    /// Create a context from an already-built request URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Build the absolute request URL from HTTP request parts.
    ///
    /// The host comes from `X-Forwarded-Host`, then `Host`, then the URI
    /// authority. The scheme comes from `X-Forwarded-Proto`, then the URI, then
    /// `default_scheme`. Without any host the context holds the bare
    /// path and query.
    pub fn from_http(headers: &HeaderMap, uri: &Uri, default_scheme: &str) -> Self {
        let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());

        let host = header_value(headers, "x-forwarded-host")
            .or_else(|| header_value(headers, header::HOST.as_str()))
            .or_else(|| uri.authority().map(|a| a.as_str().to_string()));

        let Some(host) = host else {
            return Self::new(path_and_query);
        };

        let scheme = header_value(headers, "x-forwarded-proto")
            .or_else(|| uri.scheme_str().map(str::to_string))
            .unwrap_or_else(|| default_scheme.to_string());

        Self::new(format!("{scheme}://{host}{path_and_query}"))
    }

    /// The absolute URL of the request
    pub fn absolute_url(&self) -> &str {
        &self.url
    }

    /// First value of a query parameter, percent-decoded
    pub fn query_param(&self, name: &str) -> Option<String> {
        params::query_param(&self.url, name)
    }
}

/// First comma-separated value of a header (proxies append to forwarded headers)
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
