//! Actions representing side effects requested by the store.
//!
//! The store never performs I/O. When an event needs books fetched, or makes
//! an in-flight fetch obsolete, it returns an [`Action`] and the caller carries
//! it out (see [`run_actions`](crate::fetch::run_actions)).
//!
//! # Example
//!
//! ```rust
//! use get_my_books::app::{Action, Event, SearchStore};
//!
//! let mut store = SearchStore::new(10);
//! let (_, actions) = store.dispatch(Event::SetQuery("rust".into()));
//! assert!(matches!(actions.as_slice(), [Action::FetchBooks(request)] if request.query == "rust"));
//! ```

use crate::fetch::FetchRequest;

/// Commands for the fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch every book for the request's query and report back through
    /// [`SearchStore::receive`](crate::app::SearchStore::receive).
    FetchBooks(FetchRequest),

    /// Stop working on a request; its response would be dropped anyway.
    CancelFetch {
        /// Id of the abandoned request.
        request_id: u64,
    },
}
