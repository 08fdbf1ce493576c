//! Events and the state transition function.
//!
//! [`apply`] is the only way a [`SearchState`] changes. It is pure and total:
//! every [`Event`] maps the old state to a new one, and nothing panics. The
//! store wraps it with request bookkeeping; tests call it directly.
//!
//! # Event Types
//!
//! - **Fetch lifecycle**: `FetchStart`, `FetchSuccess`, `FetchFailure`
//! - **Search context**: `SetQuery`, `ResetState`
//! - **Paging**: `LoadMoreBooks`
//! - **Projection**: `SortBooks`, `SetPrice`
//! - **Decoding fallback**: `Unrecognized`
//!
//! # Example
//!
//! ```rust
//! use get_my_books::app::{apply, Event, SearchState};
//!
//! let state = apply(&SearchState::default(), &Event::SetQuery("rust".into()));
//! let state = apply(&state, &Event::FetchStart);
//! assert!(state.loading);
//! assert_eq!(state.query, "rust");
//! ```

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};

use crate::app::SearchState;
use crate::domain::{Book, FetchError, PriceRange, SortOrder};
use crate::projection::{filter_by_price, sort_books};

/// Discrete inputs to the search state.
///
/// Serialized adjacently tagged, e.g. `{"type": "SORT_BOOKS", "payload":
/// "lowPrice"}`. Tags that do not name a known event decode to
/// [`Event::Unrecognized`] whatever their payload, and [`apply`] ignores
/// them. A known tag with a malformed payload is still a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// A fetch for the current query started.
    FetchStart,

    /// A fetch completed with the complete result set.
    FetchSuccess(Vec<Book>),

    /// A fetch failed.
    FetchFailure(FetchError),

    /// A new search context was entered.
    SetQuery(String),

    /// The search was cleared.
    ResetState,

    /// One more page of the projection should become visible.
    LoadMoreBooks,

    /// The user picked a sort order.
    SortBooks(SortOrder),

    /// The user picked a price range.
    SetPrice(PriceRange),

    /// An event this version does not know about.
    Unrecognized,
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Tagged {
            #[serde(rename = "type")]
            kind: String,
            #[serde(default)]
            payload: serde_json::Value,
        }

        let Tagged { kind, payload } = Tagged::deserialize(deserializer)?;

        let event = match kind.as_str() {
            "FETCH_START" => Self::FetchStart,
            "FETCH_SUCCESS" => Self::FetchSuccess(decode_payload(payload)?),
            "FETCH_FAILURE" => Self::FetchFailure(decode_payload(payload)?),
            "SET_QUERY" => Self::SetQuery(decode_payload(payload)?),
            "RESET_STATE" => Self::ResetState,
            "LOAD_MORE_BOOKS" => Self::LoadMoreBooks,
            "SORT_BOOKS" => Self::SortBooks(decode_payload(payload)?),
            "SET_PRICE" => Self::SetPrice(decode_payload(payload)?),
            _ => Self::Unrecognized,
        };
        Ok(event)
    }
}

fn decode_payload<T, E>(payload: serde_json::Value) -> std::result::Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    serde_json::from_value(payload).map_err(E::custom)
}

impl Event {
    /// Short name for logs, without the payload.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FetchStart => "fetch_start",
            Self::FetchSuccess(_) => "fetch_success",
            Self::FetchFailure(_) => "fetch_failure",
            Self::SetQuery(_) => "set_query",
            Self::ResetState => "reset_state",
            Self::LoadMoreBooks => "load_more_books",
            Self::SortBooks(_) => "sort_books",
            Self::SetPrice(_) => "set_price",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Applies `event` to `state` and returns the resulting state.
///
/// # Transitions
///
/// - `FetchStart`: marks loading, clears the error
/// - `FetchSuccess`: replaces the result set, resets page to 1 and the
///   projection settings to default/unbounded
/// - `FetchFailure`: initial state with the error and the previous query
/// - `SetQuery`: initial state with the new query
/// - `ResetState`: initial state
/// - `LoadMoreBooks`: advances the page; without a page there is nothing to
///   advance and the state is returned unchanged
/// - `SortBooks`: `Default` re-derives the projection from `books`; any other
///   order re-sorts the current projection, keeping the price filter
/// - `SetPrice`: re-derives the projection from `books`, then re-sorts it by
///   the active order
/// - `Unrecognized`: no change
#[must_use]
pub fn apply(state: &SearchState, event: &Event) -> SearchState {
    match event {
        Event::FetchStart => SearchState {
            loading: true,
            error: None,
            ..state.clone()
        },
        Event::FetchSuccess(books) => SearchState {
            books: Some(books.clone()),
            filtered_books: Some(books.clone()),
            page: Some(1),
            loading: false,
            error: None,
            order: SortOrder::Default,
            price_range: PriceRange::UNBOUNDED,
            query: state.query.clone(),
        },
        Event::FetchFailure(error) => SearchState {
            error: Some(error.clone()),
            ..SearchState::with_query(state.query.clone())
        },
        Event::SetQuery(query) => SearchState::with_query(query.clone()),
        Event::ResetState => SearchState::default(),
        Event::LoadMoreBooks => match state.page {
            Some(page) => SearchState {
                page: Some(page.saturating_add(1)),
                ..state.clone()
            },
            None => state.clone(),
        },
        Event::SortBooks(order) => {
            let filtered_books = if *order == SortOrder::Default {
                state
                    .books
                    .as_deref()
                    .map(|books| filter_by_price(books, state.price_range))
            } else {
                state.filtered_books.clone().map(|mut books| {
                    sort_books(&mut books, *order);
                    books
                })
            };

            SearchState {
                filtered_books,
                order: *order,
                ..state.clone()
            }
        }
        Event::SetPrice(range) => {
            let filtered_books = state.books.as_deref().map(|books| {
                let mut filtered = filter_by_price(books, *range);
                sort_books(&mut filtered, state.order);
                filtered
            });

            SearchState {
                filtered_books,
                price_range: *range,
                ..state.clone()
            }
        }
        Event::Unrecognized => state.clone(),
    }
}

/// Translates raw search-box text into the event it should trigger.
///
/// The text is trimmed first. Text equal to the current query triggers
/// nothing, empty text clears the search, anything else starts a new one.
///
/// # Examples
///
/// ```
/// use get_my_books::app::{query_event, Event};
///
/// assert_eq!(query_event("rust", "  rust "), None);
/// assert_eq!(query_event("rust", "   "), Some(Event::ResetState));
/// assert_eq!(query_event("", "tokio"), Some(Event::SetQuery("tokio".into())));
/// ```
#[must_use]
pub fn query_event(current_query: &str, raw: &str) -> Option<Event> {
    let query = raw.trim();

    if query == current_query {
        return None;
    }
    if query.is_empty() {
        return Some(Event::ResetState);
    }
    Some(Event::SetQuery(query.to_string()))
}
