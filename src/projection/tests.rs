//! Projection Function Tests
//!
//! Covers the price rules (effective price, status gating, inclusive bounds)
//! and the four orderings, including stability on ties.

use super::*;
use crate::domain::{Book, PriceRange, SortOrder, PURCHASABLE_STATUS};
use rstest::rstest;

fn book(title: &str, price: i64, sale_price: i64) -> Book {
    Book {
        title: title.to_string(),
        price,
        sale_price,
        status: PURCHASABLE_STATUS.to_string(),
        ..Book::default()
    }
}

fn sold_out(title: &str, price: i64) -> Book {
    Book {
        status: "절판".to_string(),
        ..book(title, price, 0)
    }
}

fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}

// ============================================================
// PRICE EXTRACTION
// ============================================================

#[rstest]
#[case(20000, 18000, 18000)]
#[case(20000, 0, 20000)]
#[case(20000, -1, 20000)]
fn effective_price_prefers_positive_sale_price(#[case] price: i64, #[case] sale: i64, #[case] expected: i64) {
    assert_eq!(effective_price(&book("x", price, sale)), expected);
}

#[test]
fn directional_price_of_purchasable_ignores_direction() {
    let b = book("x", 15000, 12000);
    assert_eq!(directional_price(&b, PriceDirection::Ascending), 12000);
    assert_eq!(directional_price(&b, PriceDirection::Descending), 12000);
}

#[test]
fn directional_price_pins_non_purchasable_to_extremes() {
    let b = sold_out("x", 100);
    assert_eq!(directional_price(&b, PriceDirection::Ascending), i64::MAX);
    assert_eq!(directional_price(&b, PriceDirection::Descending), i64::MIN);
}

// ============================================================
// PRICE FILTER
// ============================================================

#[rstest]
#[case(15000, true)]
#[case(10000, true)]
#[case(20000, true)]
#[case(9999, false)]
#[case(20001, false)]
fn price_filter_bounds_are_inclusive(#[case] sale: i64, #[case] expected: bool) {
    let keep = price_filter(PriceRange::between(10000, 20000));
    assert_eq!(keep(&book("x", 30000, sale)), expected);
}

#[test]
fn price_filter_uses_price_when_not_discounted() {
    let keep = price_filter(PriceRange::between(10000, 20000));
    assert!(keep(&book("x", 15000, 0)));
    assert!(!keep(&book("x", 25000, 0)));
}

#[test]
fn price_filter_rejects_non_purchasable_even_when_unbounded() {
    let keep = price_filter(PriceRange::UNBOUNDED);
    assert!(!keep(&sold_out("x", 100)));
    assert!(keep(&book("x", 100, 0)));
}

#[test]
fn half_open_ranges_filter_one_side() {
    let books = vec![book("a", 5000, 0), book("b", 15000, 0), book("c", 25000, 0)];

    let at_least = filter_by_price(&books, PriceRange::new(Some(10000), None));
    assert_eq!(titles(&at_least), vec!["b", "c"]);

    let at_most = filter_by_price(&books, PriceRange::new(None, Some(15000)));
    assert_eq!(titles(&at_most), vec!["a", "b"]);
}

#[test]
fn filter_by_price_unbounded_keeps_everything_in_order() {
    let books = vec![book("a", 300, 0), sold_out("b", 100), book("c", 200, 0)];
    let projected = filter_by_price(&books, PriceRange::UNBOUNDED);
    assert_eq!(projected, books);
}

#[test]
fn filter_by_price_excludes_non_purchasable_for_finite_range() {
    let books = vec![book("a", 300, 0), sold_out("b", 100), book("c", 200, 0)];
    let projected = filter_by_price(&books, PriceRange::between(0, 1000));
    assert_eq!(titles(&projected), vec!["a", "c"]);
}

#[test]
fn inverted_range_keeps_nothing() {
    let books = vec![book("a", 300, 0), book("b", 200, 0)];
    assert!(filter_by_price(&books, PriceRange::between(500, 100)).is_empty());
}

// ============================================================
// ORDERINGS
// ============================================================

#[test]
fn low_price_sorts_ascending_with_unavailable_last() {
    let mut books = vec![sold_out("gone", 1), book("mid", 200, 0), book("cheap", 900, 100), book("dear", 300, 0)];
    sort_books(&mut books, SortOrder::LowPrice);
    assert_eq!(titles(&books), vec!["cheap", "mid", "dear", "gone"]);
}

#[test]
fn high_price_sorts_descending_with_unavailable_last() {
    let mut books = vec![sold_out("gone", 99999), book("mid", 200, 0), book("cheap", 900, 100), book("dear", 300, 0)];
    sort_books(&mut books, SortOrder::HighPrice);
    assert_eq!(titles(&books), vec!["dear", "mid", "cheap", "gone"]);
}

#[test]
fn title_orders_are_ordinal() {
    let mut books = vec![book("b", 0, 0), book("B", 0, 0), book("가", 0, 0), book("a", 0, 0)];

    sort_books(&mut books, SortOrder::TitleAsc);
    assert_eq!(titles(&books), vec!["B", "a", "b", "가"]);

    sort_books(&mut books, SortOrder::TitleDesc);
    assert_eq!(titles(&books), vec!["가", "b", "a", "B"]);
}

#[test]
fn title_sort_is_stable_on_ties() {
    let mut books = vec![book("same", 3, 0), book("other", 1, 0), book("same", 1, 0), book("same", 2, 0)];
    sort_books(&mut books, SortOrder::TitleAsc);

    let same_prices: Vec<i64> = books.iter().filter(|b| b.title == "same").map(|b| b.price).collect();
    assert_eq!(same_prices, vec![3, 1, 2]);
    assert_eq!(books[0].title, "other");
}

#[test]
fn price_sort_is_stable_on_ties() {
    let mut books = vec![book("first", 100, 0), sold_out("x", 1), book("second", 500, 100), sold_out("y", 2)];
    sort_books(&mut books, SortOrder::LowPrice);
    assert_eq!(titles(&books), vec!["first", "second", "x", "y"]);
}

#[test]
fn default_order_leaves_books_untouched() {
    let mut books = vec![book("b", 2, 0), book("a", 1, 0)];
    let before = books.clone();
    sort_books(&mut books, SortOrder::Default);
    assert_eq!(books, before);
    assert!(comparator(SortOrder::Default).is_none());
}
