//! Owned state container with request bookkeeping.
//!
//! [`SearchStore`] holds one [`SearchState`] and is the handle the UI and the
//! fetch collaborator share. Besides applying events it keeps track of the
//! single fetch that may be in flight: every request gets a fresh id, and a
//! response is only applied when it answers the current request. Results for
//! a query the user has already moved away from are dropped here instead of
//! overwriting the new search.

use crate::app::handler::{apply, query_event, Event};
use crate::app::{Action, SearchState};
use crate::fetch::{FetchRequest, FetchResponse};
use crate::ui::viewmodel::SearchViewModel;

/// Explicitly constructed owner of the search state.
///
/// # Examples
///
/// ```rust
/// use get_my_books::app::{Action, SearchStore};
/// use get_my_books::fetch::FetchResponse;
///
/// let mut store = SearchStore::new(10);
/// let (_, actions) = store.submit_query(" rust ");
/// let Some(Action::FetchBooks(request)) = actions.into_iter().next() else { unreachable!() };
///
/// store.receive(FetchResponse::Success { request_id: request.id, books: vec![] });
/// assert_eq!(store.state().page, Some(1));
/// assert!(!store.state().loading);
/// ```
#[derive(Debug, Clone)]
pub struct SearchStore {
    state: SearchState,
    in_flight: Option<FetchRequest>,
    next_request_id: u64,
    page_size: usize,
}

impl SearchStore {
    /// Creates a store in the initial state.
    ///
    /// `page_size` is the number of books revealed per page in the view
    /// model; zero is clamped to one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            state: SearchState::default(),
            in_flight: None,
            next_request_id: 1,
            page_size: page_size.max(1),
        }
    }

    /// Read-only view of the current state.
    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// The request whose response the store is waiting for, if any.
    #[must_use]
    pub const fn in_flight(&self) -> Option<&FetchRequest> {
        self.in_flight.as_ref()
    }

    /// Applies `event` and returns whether the state changed, plus the
    /// actions the caller should execute.
    ///
    /// `SetQuery` and `ResetState` cancel the in-flight request. A non-empty
    /// `SetQuery` immediately starts a fetch for the new query. Fetch outcomes
    /// dispatched here are applied unconditionally; use
    /// [`SearchStore::receive`] to have them checked against the in-flight
    /// request.
    pub fn dispatch(&mut self, event: Event) -> (bool, Vec<Action>) {
        let _span = tracing::debug_span!("dispatch", event = event.name()).entered();

        let mut actions = vec![];

        match &event {
            Event::SetQuery(query) => {
                actions.extend(self.cancel_in_flight());
                let mut changed = self.transition(&event);
                if !query.is_empty() {
                    let request = self.start_request(query.clone());
                    changed |= self.transition(&Event::FetchStart);
                    actions.push(Action::FetchBooks(request));
                }
                return (changed, actions);
            }
            Event::ResetState => actions.extend(self.cancel_in_flight()),
            Event::FetchSuccess(_) | Event::FetchFailure(_) => self.in_flight = None,
            Event::LoadMoreBooks if self.state.page.is_none() => {
                tracing::debug!("no results to page through, ignoring load more");
            }
            Event::Unrecognized => tracing::debug!("ignoring unrecognized event"),
            _ => {}
        }

        (self.transition(&event), actions)
    }

    /// Translates raw search-box text and dispatches the resulting event.
    ///
    /// Text equal to the current query does nothing.
    pub fn submit_query(&mut self, raw: &str) -> (bool, Vec<Action>) {
        match query_event(&self.state.query, raw) {
            Some(event) => self.dispatch(event),
            None => {
                tracing::trace!(query = %self.state.query, "query unchanged");
                (false, vec![])
            }
        }
    }

    /// Applies a fetch response if it answers the in-flight request.
    ///
    /// Responses to cancelled or superseded requests are dropped and leave the
    /// state untouched.
    pub fn receive(&mut self, response: FetchResponse) -> (bool, Vec<Action>) {
        let request_id = response.request_id();
        let current = self.in_flight.as_ref().map(|request| request.id);

        if current != Some(request_id) {
            tracing::debug!(
                request_id = request_id,
                in_flight = ?current,
                "dropping stale fetch response"
            );
            return (false, vec![]);
        }

        let event = match response {
            FetchResponse::Success { books, .. } => {
                tracing::debug!(request_id = request_id, books = books.len(), "fetch succeeded");
                Event::FetchSuccess(books)
            }
            FetchResponse::Failure { error, .. } => {
                tracing::debug!(request_id = request_id, error = %error, "fetch failed");
                Event::FetchFailure(error)
            }
        };

        self.dispatch(event)
    }

    /// View model of the current state at the store's page size.
    #[must_use]
    pub fn viewmodel(&self) -> SearchViewModel {
        self.state.compute_viewmodel(self.page_size)
    }

    fn transition(&mut self, event: &Event) -> bool {
        let next = apply(&self.state, event);
        if next == self.state {
            return false;
        }

        tracing::debug!(
            query = %next.query,
            loading = next.loading,
            page = ?next.page,
            order = %next.order,
            total = ?next.total_count(),
            filtered = ?next.filtered_count(),
            "state updated"
        );

        self.state = next;
        true
    }

    fn start_request(&mut self, query: String) -> FetchRequest {
        let request = FetchRequest {
            id: self.next_request_id,
            query,
        };
        self.next_request_id += 1;

        tracing::debug!(request_id = request.id, query = %request.query, "fetch requested");
        self.in_flight = Some(request.clone());
        request
    }

    fn cancel_in_flight(&mut self) -> Option<Action> {
        self.in_flight.take().map(|request| {
            tracing::debug!(request_id = request.id, query = %request.query, "cancelling in-flight fetch");
            Action::CancelFetch {
                request_id: request.id,
            }
        })
    }
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new(crate::DEFAULT_PAGE_SIZE)
    }
}
