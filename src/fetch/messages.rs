//! Request and response types exchanged with the fetch collaborator.
//!
//! The store issues [`FetchRequest`]s and expects exactly one
//! [`FetchResponse`] back per request. Responses carry the id of the request
//! they answer so the store can discard results of abandoned queries.
//! [`BookPage`] mirrors one page of the search API's paged wire format.

use crate::domain::{Book, FetchError};
use serde::{Deserialize, Serialize};

/// A request to fetch every book matching `query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Store-assigned id, strictly increasing per store.
    pub id: u64,

    /// Query the request was issued for.
    pub query: String,
}

/// Outcome of a [`FetchRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchResponse {
    /// All pages were collected.
    Success {
        request_id: u64,
        books: Vec<Book>,
    },

    /// Fetching stopped on the first failing page.
    Failure {
        request_id: u64,
        error: FetchError,
    },
}

impl FetchResponse {
    /// Id of the request this response answers.
    #[must_use]
    pub const fn request_id(&self) -> u64 {
        match self {
            Self::Success { request_id, .. } | Self::Failure { request_id, .. } => *request_id,
        }
    }
}

/// One page of search results in the API wire format.
///
/// ```json
/// {
///   "documents": [{ "title": "...", "price": 20000, "sale_price": 18000 }],
///   "meta": { "is_end": false, "pageable_count": 120, "total_count": 134 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPage {
    #[serde(default)]
    pub documents: Vec<Book>,
    pub meta: PageMeta,
}

/// Paging metadata attached to every [`BookPage`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// `true` on the last page.
    pub is_end: bool,

    /// Number of results reachable through paging.
    pub pageable_count: usize,

    /// Number of results matching the query.
    pub total_count: usize,
}
