//! Query parameter rewriting
//!
//! Absolute URLs go through [`url::Url`]. Relative references (a path, a bare
//! query, or the empty string) have no base to parse against, so their query
//! part is handled with `form_urlencoded` directly.

use crate::error::Result;
use url::{form_urlencoded, Url};

type Pairs = Vec<(String, String)>;

/// Set `key` to `value` in the query string of `url`.
///
/// The first occurrence of `key` is replaced in place and any repeated
/// occurrences are dropped. When `key` is absent it is appended. Other
/// parameters keep their order.
///
/// ```
/// use jsonapi_pagination::query::replace_query_param;
///
/// let url = replace_query_param("http://api.test/items?page=1&sort=name", "page", "3").unwrap();
/// assert_eq!(url, "http://api.test/items?page=3&sort=name");
///
/// assert_eq!(replace_query_param("", "page", "2").unwrap(), "?page=2");
/// ```
pub fn replace_query_param(url: &str, key: &str, value: &str) -> Result<String> {
    rewrite_query(url, |pairs| {
        let mut seen = false;
        pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *v = value.to_string();
            true
        });
        if !seen {
            pairs.push((key.to_string(), value.to_string()));
        }
    })
}

/// Remove every occurrence of `key` from the query string of `url`.
pub fn remove_query_param(url: &str, key: &str) -> Result<String> {
    rewrite_query(url, |pairs| pairs.retain(|(k, _)| k != key))
}

/// First value of `key` in the query string of `url`, percent-decoded.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let (rest, _) = split_fragment(url);
    let (_, query) = rest.split_once('?')?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

fn rewrite_query<F: FnOnce(&mut Pairs)>(url: &str, f: F) -> Result<String> {
    match Url::parse(url) {
        Ok(mut parsed) => {
            let mut pairs: Pairs = parsed.query_pairs().into_owned().collect();
            f(&mut pairs);
            if pairs.is_empty() {
                parsed.set_query(None);
            } else {
                parsed.query_pairs_mut().clear().extend_pairs(pairs.iter());
            }
            Ok(parsed.into())
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(rewrite_relative(url, f)),
        Err(e) => Err(e.into()),
    }
}

fn rewrite_relative<F: FnOnce(&mut Pairs)>(url: &str, f: F) -> String {
    let (rest, fragment) = split_fragment(url);
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    let mut pairs: Pairs = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    f(&mut pairs);

    let mut out = path.to_string();
    if !pairs.is_empty() {
        out.push('?');
        out.push_str(
            &form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs.iter())
                .finish(),
        );
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

fn split_fragment(url: &str) -> (&str, Option<&str>) {
    match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    }
}
