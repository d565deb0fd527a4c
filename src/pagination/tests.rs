//! Tests for pagination module

use super::*;
use crate::config::PaginationSettings;
use crate::error::Result;
use crate::query::{query_param, RequestContext};
use crate::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

const BASE: &str = "http://api.test/records";

fn records(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

fn request(query: &str) -> RequestContext {
    if query.is_empty() {
        RequestContext::new(BASE)
    } else {
        RequestContext::new(format!("{BASE}?{query}"))
    }
}

fn paginate(n: u32, query: &str) -> Result<PageNumberPagination<u32>> {
    PageNumberPagination::paginate(
        &PaginationSettings::default(),
        &records(n),
        Some(&request(query)),
    )
}

fn page_of(link: &Option<String>) -> Option<String> {
    link.as_deref().and_then(|url| query_param(url, "page"))
}

// ============================================================================
// Envelope Tests
// ============================================================================

#[test]
fn test_middle_page_scenario() {
    let pagination = paginate(25, "page=2").unwrap();

    assert_eq!(
        pagination.pagination_meta(),
        PageNumberMeta {
            page: 2,
            pages: 3,
            count: 25
        }
    );

    let links = pagination.pagination_links().unwrap();
    assert_eq!(page_of(&links.first).as_deref(), Some("1"));
    assert_eq!(page_of(&links.last).as_deref(), Some("3"));
    assert_eq!(page_of(&links.next).as_deref(), Some("3"));
    assert_eq!(page_of(&links.prev), None);
    assert_eq!(links.next.as_deref(), Some("http://api.test/records?page=3"));
    assert_eq!(links.prev.as_deref(), Some("http://api.test/records"));
}

#[test]
fn test_empty_collection_scenario() {
    let pagination = paginate(0, "").unwrap();

    assert_eq!(
        pagination.pagination_meta(),
        PageNumberMeta {
            page: 1,
            pages: 0,
            count: 0
        }
    );
    let links = pagination.pagination_links().unwrap();
    assert!(links.is_empty());
    assert_eq!(links, PaginationLinks::default());
}

#[test]
fn test_first_page_links() {
    let links = paginate(25, "").unwrap().pagination_links().unwrap();
    assert_eq!(links.prev, None);
    assert_eq!(page_of(&links.next).as_deref(), Some("2"));
}

#[test]
fn test_last_page_links() {
    let links = paginate(25, "page=3").unwrap().pagination_links().unwrap();
    assert_eq!(links.next, None);
    assert_eq!(page_of(&links.prev).as_deref(), Some("2"));
}

#[test]
fn test_single_page_links() {
    let links = paginate(4, "").unwrap().pagination_links().unwrap();
    assert_eq!(page_of(&links.first).as_deref(), Some("1"));
    assert_eq!(page_of(&links.last).as_deref(), Some("1"));
    assert_eq!(links.next, None);
    assert_eq!(links.prev, None);
}

#[test]
fn test_into_response_uses_page_items() {
    let response = paginate(25, "page=3").unwrap().into_response().unwrap();
    assert_eq!(response.results, vec![21, 22, 23, 24, 25]);
    assert_eq!(response.meta.pagination.page, 3);
}

#[test]
fn test_paginated_response_with_serialized_data() {
    let pagination = paginate(25, "page=2").unwrap();
    let data: Vec<_> = pagination
        .page()
        .items()
        .iter()
        .map(|id| json!({"type": "records", "id": id.to_string()}))
        .collect();

    let response = pagination.paginated_response(data).unwrap();
    assert_eq!(response.results.len(), 10);
    assert_eq!(response.results[0]["id"], "11");
}

#[test]
fn test_envelope_serialization_order() {
    let response = paginate(3, "page_size=2&page=2")
        .unwrap()
        .into_response()
        .unwrap();
    let body = serde_json::to_string(&response).unwrap();

    assert_eq!(
        body,
        concat!(
            r#"{"results":[3],"#,
            r#""meta":{"pagination":{"page":2,"pages":2,"count":3}},"#,
            r#""links":{"first":"http://api.test/records?page_size=2&page=1","#,
            r#""last":"http://api.test/records?page_size=2&page=2","#,
            r#""next":null,"#,
            r#""prev":"http://api.test/records?page_size=2"}}"#
        )
    );
}

#[test]
fn test_prev_to_first_page_drops_page_param() {
    let links = paginate(25, "page=2&sort=x").unwrap().pagination_links().unwrap();
    assert_eq!(links.prev.as_deref(), Some("http://api.test/records?sort=x"));
    assert_eq!(links.first.as_deref(), Some("http://api.test/records?page=1&sort=x"));

    // Further back the page parameter is kept
    let links = paginate(25, "page=3&sort=x").unwrap().pagination_links().unwrap();
    assert_eq!(links.prev.as_deref(), Some("http://api.test/records?page=2&sort=x"));
}

#[test]
fn test_prev_to_first_page_without_request() {
    let page = crate::page::Paginator::new(25, 10)
        .page(&records(25), 2)
        .unwrap();
    let pagination = PageNumberPagination::new(PaginationSettings::default(), page, None);

    let links = pagination.pagination_links().unwrap();
    assert_eq!(links.prev.as_deref(), Some(""));
    assert_eq!(links.next.as_deref(), Some("?page=3"));
}

// ============================================================================
// build_link Tests
// ============================================================================

#[test]
fn test_build_link_falsy_index() {
    let pagination = paginate(25, "page=2").unwrap();
    assert_eq!(pagination.build_link(None).unwrap(), None);
    assert_eq!(pagination.build_link(Some(0)).unwrap(), None);

    let empty = paginate(0, "").unwrap();
    assert_eq!(empty.build_link(None).unwrap(), None);
    assert_eq!(empty.build_link(Some(0)).unwrap(), None);
}

#[test]
fn test_build_link_round_trip() {
    let pagination = paginate(25, "page=2&sort=-id").unwrap();
    for n in [1_u64, 2, 3, 17, 1000] {
        let link = pagination.build_link(Some(n)).unwrap().unwrap();
        assert_eq!(query_param(&link, "page"), Some(n.to_string()));
        assert_eq!(query_param(&link, "sort").as_deref(), Some("-id"));
    }
}

#[test]
fn test_build_link_without_request() {
    let pagination = PageNumberPagination::paginate(
        &PaginationSettings::default(),
        &records(25),
        None,
    )
    .unwrap();

    assert_eq!(pagination.build_link(Some(3)).unwrap().as_deref(), Some("?page=3"));
    let links = pagination.pagination_links().unwrap();
    assert_eq!(links.first.as_deref(), Some("?page=1"));
    assert_eq!(links.next.as_deref(), Some("?page=2"));
}

#[test]
fn test_build_link_custom_page_param() {
    let settings = PaginationSettings {
        page_query_param: "p".to_string(),
        ..Default::default()
    };
    let pagination =
        PageNumberPagination::paginate(&settings, &records(25), Some(&request("p=2"))).unwrap();

    assert_eq!(pagination.page().number(), 2);
    let links = pagination.pagination_links().unwrap();
    assert_eq!(links.last.as_deref(), Some("http://api.test/records?p=3"));
}

// ============================================================================
// Page Size / Page Number Resolution Tests
// ============================================================================

#[test_case("", 10 ; "default")]
#[test_case("page_size=5", 5 ; "requested")]
#[test_case("page_size=500", 100 ; "clamped to max")]
#[test_case("page_size=0", 10 ; "zero falls back")]
#[test_case("page_size=-3", 10 ; "negative falls back")]
#[test_case("page_size=abc", 10 ; "garbage falls back")]
fn test_resolve_page_size(query: &str, expected: u32) {
    let settings = PaginationSettings::default();
    assert_eq!(resolve_page_size(&settings, Some(&request(query))), expected);
}

#[test]
fn test_resolve_page_size_without_request_or_param() {
    let settings = PaginationSettings::default();
    assert_eq!(resolve_page_size(&settings, None), 10);

    let settings = PaginationSettings {
        page_size_query_param: None,
        ..Default::default()
    };
    assert_eq!(resolve_page_size(&settings, Some(&request("page_size=5"))), 10);

    let unbounded = PaginationSettings::default().with_max_page_size(None);
    assert_eq!(resolve_page_size(&unbounded, Some(&request("page_size=500"))), 500);
}

#[test]
fn test_page_size_applies_to_meta() {
    let pagination = paginate(25, "page_size=5&page=5").unwrap();
    assert_eq!(
        pagination.pagination_meta(),
        PageNumberMeta {
            page: 5,
            pages: 5,
            count: 25
        }
    );
}

#[test]
fn test_last_page_keyword() {
    let pagination = paginate(25, "page=last").unwrap();
    assert_eq!(pagination.page().number(), 3);

    let empty = paginate(0, "page=last").unwrap();
    assert_eq!(empty.page().number(), 1);
}

#[test_case("page=4" ; "past the end")]
#[test_case("page=" ; "empty value")]
#[test_case("page=0" ; "zero")]
#[test_case("page=two" ; "not a number")]
fn test_invalid_page(query: &str) {
    let result = paginate(25, query);
    assert!(matches!(result, Err(Error::InvalidPage { .. })));
}

#[test]
fn test_orphans_setting() {
    let settings = PaginationSettings::default().with_orphans(3);
    let pagination =
        PageNumberPagination::paginate(&settings, &records(23), Some(&request("page=2"))).unwrap();

    assert_eq!(pagination.pagination_meta().pages, 2);
    assert_eq!(pagination.page().len(), 13);
    assert_eq!(pagination.pagination_links().unwrap().next, None);
}

// ============================================================================
// Invariant Tests
// ============================================================================

#[test]
fn test_meta_and_link_invariants() {
    for count in 0..=23_u32 {
        for size in 1..=7_u32 {
            let data = records(count);
            let settings = PaginationSettings::default().with_page_size(size);
            let pages = u64::from(count.div_ceil(size));

            for page in 1..=pages.max(1) {
                let req = request(&format!("page={page}"));
                let pagination = PageNumberPagination::paginate(&settings, &data, Some(&req))
                    .unwrap();
                let meta = pagination.pagination_meta();
                let links = pagination.pagination_links().unwrap();

                assert_eq!(meta.count, u64::from(count));
                assert_eq!(meta.pages, pages);
                if count == 0 {
                    assert!(links.is_empty());
                } else {
                    assert!(1 <= meta.page && meta.page <= meta.pages);
                    assert_eq!(links.prev.is_none(), meta.page == 1);
                    assert_eq!(links.next.is_none(), meta.page == meta.pages);
                    assert!(links.first.is_some() && links.last.is_some());
                }
            }
        }
    }
}

// ============================================================================
// Contract Tests
// ============================================================================

/// A strategy with fixed links, used to exercise the provided trait methods
struct FixedStrategy;

impl JsonApiPagination for FixedStrategy {
    type Meta = serde_json::Value;

    fn first_link(&self) -> Result<Option<String>> {
        Ok(Some("/first".to_string()))
    }

    fn last_link(&self) -> Result<Option<String>> {
        Ok(Some("/last".to_string()))
    }

    fn next_link(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn previous_link(&self) -> Result<Option<String>> {
        Ok(Some("/prev".to_string()))
    }

    fn pagination_meta(&self) -> serde_json::Value {
        json!({"cursor": "abc"})
    }
}

#[test]
fn test_contract_assembles_envelope() {
    let response = FixedStrategy.paginated_response(vec!["a", "b"]).unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "results": ["a", "b"],
            "meta": {"pagination": {"cursor": "abc"}},
            "links": {"first": "/first", "last": "/last", "next": null, "prev": "/prev"}
        })
    );
}
