//! Search state and view model computation.
//!
//! [`SearchState`] is the single source of truth for a search session. It is
//! only ever replaced by [`apply`](crate::app::handler::apply); nothing else
//! writes to it. Read access is free: the UI renders from a snapshot or from
//! the view model computed here.
//!
//! # State Components
//!
//! - **Books**: complete result set of the current query
//! - **Filtered Books**: projection of `books` through price range and order
//! - **Page**: display cursor, `page * page_size` items are visible
//! - **Query / Loading / Error**: fetch lifecycle
//! - **Order / Price Range**: active projection settings

use serde::Serialize;

use crate::domain::{Book, FetchError, PriceRange, SortOrder};
use crate::ui::format::format_price;
use crate::ui::viewmodel::{BookItem, ResultSummary, SearchViewModel, ViewStatus};

/// Canonical search state.
///
/// `Default` yields the initial state: no results, empty query, default
/// order, unbounded price range.
///
/// # Examples
///
/// ```
/// use get_my_books::{SearchState, SortOrder};
///
/// let state = SearchState::default();
/// assert!(state.books.is_none());
/// assert!(state.query.is_empty());
/// assert_eq!(state.order, SortOrder::Default);
/// assert!(state.price_range.is_unbounded());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    /// Complete result set for `query`; `None` until a fetch succeeds.
    pub books: Option<Vec<Book>>,

    /// `books` filtered by `price_range` and ordered by `order`.
    ///
    /// `None` whenever `books` is `None`.
    pub filtered_books: Option<Vec<Book>>,

    /// Pagination cursor; `None` until a fetch succeeds.
    pub page: Option<u32>,

    /// Active search term; empty means no search.
    pub query: String,

    /// `true` while a fetch is in flight.
    pub loading: bool,

    /// Last fetch failure.
    pub error: Option<FetchError>,

    /// Active sort order.
    pub order: SortOrder,

    /// Active price filter.
    pub price_range: PriceRange,
}

impl SearchState {
    /// Initial state carrying only `query`.
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Number of books in the result set, if any.
    #[must_use]
    pub fn total_count(&self) -> Option<usize> {
        self.books.as_ref().map(Vec::len)
    }

    /// Number of books in the projection, if any.
    #[must_use]
    pub fn filtered_count(&self) -> Option<usize> {
        self.filtered_books.as_ref().map(Vec::len)
    }

    /// The first `page * page_size` books of the projection.
    #[must_use]
    pub fn visible_books(&self, page_size: usize) -> &[Book] {
        let Some(filtered) = self.filtered_books.as_deref() else {
            return &[];
        };
        let pages = self.page.unwrap_or(0) as usize;
        let limit = pages.saturating_mul(page_size).min(filtered.len());
        &filtered[..limit]
    }

    /// Returns `true` if the projection holds more books than are visible.
    #[must_use]
    pub fn has_more(&self, page_size: usize) -> bool {
        self.filtered_count()
            .is_some_and(|count| count > self.visible_books(page_size).len())
    }

    /// Computes a renderable view model.
    ///
    /// # Status Resolution
    ///
    /// 1. a fetch in flight shows **Loading**
    /// 2. a stored error shows **Failed**
    /// 3. no query or no results yet shows **Idle**
    /// 4. an empty result set shows **Empty**
    /// 5. anything else shows **Results**, even when the filter hides every book
    ///
    /// # Examples
    ///
    /// ```
    /// use get_my_books::SearchState;
    /// use get_my_books::ui::ViewStatus;
    ///
    /// let state = SearchState { loading: true, ..SearchState::with_query("rust") };
    /// assert_eq!(state.compute_viewmodel(10).status, ViewStatus::Loading);
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, page_size: usize) -> SearchViewModel {
        let status = if self.loading {
            ViewStatus::Loading
        } else if let Some(error) = &self.error {
            ViewStatus::Failed {
                message: error.to_string(),
            }
        } else {
            match self.total_count() {
                _ if self.query.is_empty() => ViewStatus::Idle,
                None => ViewStatus::Idle,
                Some(0) => ViewStatus::Empty,
                Some(_) => ViewStatus::Results,
            }
        };

        let summary = match status {
            ViewStatus::Results | ViewStatus::Empty => Some(self.compute_summary()),
            _ => None,
        };

        let items = if status == ViewStatus::Results {
            self.visible_books(page_size).iter().map(Self::compute_item).collect()
        } else {
            vec![]
        };

        SearchViewModel {
            has_more: status == ViewStatus::Results && self.has_more(page_size),
            status,
            summary,
            items,
        }
    }

    fn compute_summary(&self) -> ResultSummary {
        let filtered_count = if self.price_range.is_unbounded() {
            None
        } else {
            self.filtered_count()
        };

        ResultSummary {
            query: self.query.clone(),
            total_count: self.total_count().unwrap_or(0),
            filtered_count,
        }
    }

    fn compute_item(book: &Book) -> BookItem {
        BookItem {
            title: book.title.clone(),
            authors: book.authors.join(", "),
            publisher: book.publisher.clone(),
            published: book.datetime.map(|dt| dt.format("%Y-%m-%d").to_string()),
            price: format_price(book.price),
            sale_price: book.is_discounted().then(|| format_price(book.sale_price)),
            purchasable: book.is_purchasable(),
            isbn: book.isbn.clone(),
            url: book.url.clone(),
            thumbnail: book.thumbnail.clone(),
        }
    }
}
