//! View model types representing renderable search state.
//!
//! View models are computed from a [`SearchState`](crate::SearchState) by
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready
//! strings and no business logic.
//!
//! # Example
//!
//! ```rust
//! use get_my_books::ui::{ResultSummary, SearchViewModel, ViewStatus};
//!
//! let vm = SearchViewModel {
//!     status: ViewStatus::Empty,
//!     summary: Some(ResultSummary { query: "rust".into(), total_count: 0, filtered_count: None }),
//!     items: vec![],
//!     has_more: false,
//! };
//! assert!(vm.items.is_empty());
//! ```

use serde::Serialize;

/// Complete view model for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchViewModel {
    /// Which screen to show.
    pub status: ViewStatus,

    /// Result counts, present for `Results` and `Empty`.
    pub summary: Option<ResultSummary>,

    /// Visible rows, present for `Results`.
    pub items: Vec<BookItem>,

    /// `true` if loading more would reveal further rows.
    pub has_more: bool,
}

/// Screen to show for the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewStatus {
    /// No search active, or none completed yet.
    Idle,

    Loading,

    /// The last fetch failed.
    Failed { message: String },

    /// The search completed without matches.
    Empty,

    Results,
}

/// Result count line: `"rust" 검색 결과 134건 중 12건`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub query: String,

    /// Size of the full result set.
    pub total_count: usize,

    /// Size of the projection, only while a price filter is active.
    pub filtered_count: Option<usize>,
}

/// Display row for a single book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookItem {
    pub title: String,

    /// Authors joined with `", "`.
    pub authors: String,

    pub publisher: String,

    /// Publication date as `YYYY-MM-DD`.
    pub published: Option<String>,

    /// List price, formatted.
    pub price: String,

    /// Discounted price, formatted; `None` without a discount.
    pub sale_price: Option<String>,

    pub purchasable: bool,
    pub isbn: String,
    pub url: String,
    pub thumbnail: String,
}
