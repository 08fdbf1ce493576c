//! Plain-text rendering of search view models.
//!
//! Mirrors the result page: a status line or result summary, one block per
//! visible book, and a "more" hint when further pages exist.
//!
//! # Example
//!
//! ```rust
//! use get_my_books::app::SearchStore;
//! use get_my_books::ui::render_to_string;
//!
//! let store = SearchStore::new(10);
//! assert!(render_to_string(&store.viewmodel()).contains("검색어를 입력"));
//! ```

use std::fmt::Write as _;

use super::format::format_number;
use super::viewmodel::{BookItem, ResultSummary, SearchViewModel, ViewStatus};
use crate::app::SearchStore;

/// Renders the store's current view model to stdout.
pub fn render(store: &SearchStore) {
    print!("{}", render_to_string(&store.viewmodel()));
}

/// Renders a view model to text.
#[must_use]
pub fn render_to_string(vm: &SearchViewModel) -> String {
    let mut out = String::new();

    match &vm.status {
        ViewStatus::Idle => out.push_str("검색어를 입력하세요.\n"),
        ViewStatus::Loading => out.push_str("검색 중...\n"),
        ViewStatus::Failed { message } => {
            let _ = writeln!(out, "검색에 실패했습니다: {message}");
        }
        ViewStatus::Empty | ViewStatus::Results => {
            if let Some(summary) = &vm.summary {
                out.push_str(&render_summary(summary));
                out.push('\n');
            }
            for item in &vm.items {
                out.push_str(&render_item(item));
            }
            if vm.has_more {
                out.push_str("... 더 보기\n");
            }
        }
    }

    out
}

/// `"rust" 검색 결과 134건` with ` 중 12건` appended while filtering.
#[must_use]
pub fn render_summary(summary: &ResultSummary) -> String {
    let mut line = format!(
        "\"{}\" 검색 결과 {}건",
        summary.query,
        format_number(i64::try_from(summary.total_count).unwrap_or(i64::MAX))
    );
    if let Some(filtered) = summary.filtered_count {
        let _ = write!(line, " 중 {}건", format_number(i64::try_from(filtered).unwrap_or(i64::MAX)));
    }
    line
}

fn render_item(item: &BookItem) -> String {
    let mut block = format!("- {}", item.title);
    if !item.authors.is_empty() {
        let _ = write!(block, " / {}", item.authors);
    }
    if !item.publisher.is_empty() {
        let _ = write!(block, " ({})", item.publisher);
    }
    block.push('\n');

    let price = match &item.sale_price {
        Some(sale) => format!("{sale} (정가 {})", item.price),
        None => item.price.clone(),
    };
    let availability = if item.purchasable { "" } else { " [구매 불가]" };
    let _ = writeln!(block, "  {price}{availability}");

    if let Some(published) = &item.published {
        let _ = writeln!(block, "  출간 {published}");
    }

    block
}
