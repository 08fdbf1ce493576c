//! Fetch Layer Tests
//!
//! ## Test Scopes
//! - **Catalog source**: matching, paging, request validation.
//! - **Collector**: multi-page collection, page limit, failure mid-way.
//! - **Driver**: actions executed against a store.

use super::*;
use crate::app::{Event, SearchStore};
use crate::domain::{Book, FetchError};
use std::cell::Cell;

fn titled(title: &str) -> Book {
    Book {
        title: title.to_string(),
        ..Book::default()
    }
}

fn catalog(n: usize) -> CatalogSource {
    CatalogSource::new((0..n).map(|i| titled(&format!("Rust {i}"))).collect())
}

/// Source that fails on a chosen page and counts requests.
struct FlakySource {
    inner: CatalogSource,
    fail_on: u32,
    calls: Cell<u32>,
}

impl BookSource for FlakySource {
    fn fetch_page(&self, query: &str, page: u32) -> std::result::Result<BookPage, FetchError> {
        self.calls.set(self.calls.get() + 1);
        if page == self.fail_on {
            return Err(FetchError::Transport(format!("page {page} unavailable")));
        }
        self.inner.fetch_page(query, page)
    }
}

// ============================================================
// CATALOG SOURCE
// ============================================================

#[test]
fn catalog_matches_title_author_publisher_and_isbn() {
    let source = CatalogSource::new(vec![
        titled("The Rust Programming Language"),
        Book {
            authors: vec!["Steve Klabnik".into()],
            ..titled("Book A")
        },
        Book {
            publisher: "No Starch".into(),
            ..titled("Book B")
        },
        Book {
            isbn: "1718503105 9781718503106".into(),
            ..titled("Book C")
        },
    ]);

    assert_eq!(source.fetch_page("RUST", 1).unwrap().documents.len(), 1);
    assert_eq!(source.fetch_page("klabnik", 1).unwrap().documents[0].title, "Book A");
    assert_eq!(source.fetch_page("starch", 1).unwrap().documents[0].title, "Book B");
    assert_eq!(source.fetch_page("9781718503106", 1).unwrap().documents[0].title, "Book C");
    assert!(source.fetch_page("python", 1).unwrap().documents.is_empty());
}

#[test]
fn catalog_pages_and_flags_the_last_page() {
    let source = catalog(23);

    let first = source.fetch_page("rust", 1).unwrap();
    assert_eq!(first.documents.len(), 10);
    assert!(!first.meta.is_end);
    assert_eq!(first.meta.total_count, 23);

    let last = source.fetch_page("rust", 3).unwrap();
    assert_eq!(last.documents.len(), 3);
    assert!(last.meta.is_end);
    assert_eq!(last.documents[0].title, "Rust 20");

    let beyond = source.fetch_page("rust", 9).unwrap();
    assert!(beyond.documents.is_empty());
    assert!(beyond.meta.is_end);
}

#[test]
fn catalog_rejects_empty_query_and_page_zero() {
    let source = catalog(3);
    assert!(matches!(source.fetch_page("  ", 1), Err(FetchError::Request(_))));
    assert!(matches!(source.fetch_page("rust", 0), Err(FetchError::Request(_))));
}

#[test]
fn catalog_loads_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[
            {"title": "Zero To Production", "price": 40000, "sale_price": -1, "status": "정상판매",
             "datetime": "2022-03-01T00:00:00.000+09:00", "authors": ["Luca Palmieri"]},
            {"title": "Rust in Action", "datetime": ""}
        ]"#,
    )
    .unwrap();

    let source = CatalogSource::from_file(&path).unwrap();
    assert_eq!(source.len(), 2);

    let page = source.fetch_page("luca", 1).unwrap();
    let book = &page.documents[0];
    assert_eq!(book.effective_price(), 40000);
    assert!(book.is_purchasable());
    assert_eq!(book.datetime.map(|d| d.format("%Y-%m-%d").to_string()).as_deref(), Some("2022-03-01"));

    let page = source.fetch_page("action", 1).unwrap();
    assert!(page.documents[0].datetime.is_none());
}

#[test]
fn catalog_file_errors_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(CatalogSource::from_file(&path), Err(crate::GetMyBooksError::Json(_))));
    assert!(matches!(
        CatalogSource::from_file(dir.path().join("missing.json")),
        Err(crate::GetMyBooksError::Io(_))
    ));
}

// ============================================================
// COLLECTOR
// ============================================================

#[test]
fn fetch_all_collects_every_page_in_order() {
    let request = FetchRequest { id: 7, query: "rust".into() };
    let response = fetch_all(&catalog(23), &request, DEFAULT_MAX_PAGES);

    let FetchResponse::Success { request_id, books } = response else {
        panic!("expected success");
    };
    assert_eq!(request_id, 7);
    assert_eq!(books.len(), 23);
    assert_eq!(books[22].title, "Rust 22");
}

#[test]
fn fetch_all_stops_at_page_limit() {
    let request = FetchRequest { id: 1, query: "rust".into() };
    let response = fetch_all(&catalog(45), &request, 2);

    let FetchResponse::Success { books, .. } = response else {
        panic!("expected success");
    };
    assert_eq!(books.len(), 20);
}

#[test]
fn fetch_all_fails_on_first_failing_page() {
    let source = FlakySource {
        inner: catalog(45),
        fail_on: 3,
        calls: Cell::new(0),
    };
    let request = FetchRequest { id: 4, query: "rust".into() };

    assert_eq!(
        fetch_all(&source, &request, DEFAULT_MAX_PAGES),
        FetchResponse::Failure {
            request_id: 4,
            error: FetchError::Transport("page 3 unavailable".into()),
        }
    );
    assert_eq!(source.calls.get(), 3);
}

// ============================================================
// DRIVER
// ============================================================

#[test]
fn run_actions_feeds_results_into_store() {
    let mut store = SearchStore::new(10);
    let (_, actions) = store.dispatch(Event::SetQuery("rust".into()));

    assert!(run_actions(&mut store, &catalog(12), actions, DEFAULT_MAX_PAGES));
    assert_eq!(store.state().total_count(), Some(12));
    assert!(!store.state().loading);
    assert!(store.in_flight().is_none());
}

#[test]
fn run_actions_records_failures() {
    let mut store = SearchStore::new(10);
    let source = FlakySource {
        inner: catalog(5),
        fail_on: 1,
        calls: Cell::new(0),
    };
    let (_, actions) = store.submit_query("rust");

    run_actions(&mut store, &source, actions, DEFAULT_MAX_PAGES);
    assert_eq!(store.state().query, "rust");
    assert!(matches!(store.state().error, Some(FetchError::Transport(_))));
}
