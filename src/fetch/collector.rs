//! Page collection and synchronous action execution.
//!
//! [`fetch_all`] walks a [`BookSource`] page by page until the source reports
//! the last page, so the store always receives a query's complete result set
//! in a single response. [`run_actions`] is the synchronous driver used by the
//! command-line shell and the integration tests.

use super::messages::{FetchRequest, FetchResponse};
use super::source::BookSource;
use crate::app::{Action, SearchStore};

/// Page limit of the search API; deeper pages are never served.
pub const DEFAULT_MAX_PAGES: u32 = 50;

/// Collects every page of results for `request`.
///
/// Stops at the page flagged `is_end` or after `max_pages` pages, whichever
/// comes first. The first failing page turns the whole request into a
/// [`FetchResponse::Failure`]; pages already collected are discarded.
///
/// # Examples
///
/// ```
/// use get_my_books::fetch::{fetch_all, CatalogSource, FetchRequest, FetchResponse};
/// use get_my_books::Book;
///
/// let books: Vec<Book> = (0..25)
///     .map(|i| Book { title: format!("rust {i}"), ..Book::default() })
///     .collect();
/// let source = CatalogSource::new(books);
/// let request = FetchRequest { id: 1, query: "rust".into() };
///
/// match fetch_all(&source, &request, 50) {
///     FetchResponse::Success { books, .. } => assert_eq!(books.len(), 25),
///     FetchResponse::Failure { error, .. } => panic!("{error}"),
/// }
/// ```
pub fn fetch_all<S>(source: &S, request: &FetchRequest, max_pages: u32) -> FetchResponse
where
    S: BookSource + ?Sized,
{
    let _span = tracing::debug_span!("fetch_all", request_id = request.id, query = %request.query).entered();

    let mut books = Vec::new();
    let mut page = 1;

    loop {
        match source.fetch_page(&request.query, page) {
            Ok(result) => {
                tracing::debug!(
                    page = page,
                    documents = result.documents.len(),
                    is_end = result.meta.is_end,
                    total_count = result.meta.total_count,
                    "page fetched"
                );
                books.extend(result.documents);

                if result.meta.is_end {
                    break;
                }
                if page >= max_pages {
                    tracing::debug!(max_pages = max_pages, "page limit reached, result set truncated");
                    break;
                }
                page += 1;
            }
            Err(error) => {
                tracing::warn!(page = page, error = %error, "fetch failed");
                return FetchResponse::Failure {
                    request_id: request.id,
                    error,
                };
            }
        }
    }

    FetchResponse::Success {
        request_id: request.id,
        books,
    }
}

/// Executes store actions against `source` until none remain.
///
/// Fetches run to completion before the next action is taken, so every
/// response reaches the store while its request is still current. Returns
/// `true` if any response changed the store's state.
pub fn run_actions<S>(store: &mut SearchStore, source: &S, actions: Vec<Action>, max_pages: u32) -> bool
where
    S: BookSource + ?Sized,
{
    let mut pending = actions;
    let mut changed = false;

    while !pending.is_empty() {
        let mut next = Vec::new();
        for action in pending {
            match action {
                Action::FetchBooks(request) => {
                    let response = fetch_all(source, &request, max_pages);
                    let (applied, follow_up) = store.receive(response);
                    changed |= applied;
                    next.extend(follow_up);
                }
                Action::CancelFetch { request_id } => {
                    tracing::debug!(request_id = request_id, "fetch cancelled");
                }
            }
        }
        pending = next;
    }

    changed
}
