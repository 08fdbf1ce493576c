//! Price extraction and price-range filtering.
//!
//! Status gates everything here: a book that is not purchasable never passes a
//! price filter and always lands at the far end of a price ordering.

use crate::domain::{Book, PriceRange};

/// Direction a price ordering runs in.
///
/// Decides which extreme a non-purchasable book is pinned to, so that it ends
/// up last in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    Ascending,
    Descending,
}

/// Effective price regardless of status: `sale_price` if positive, else `price`.
#[must_use]
pub const fn effective_price(book: &Book) -> i64 {
    book.effective_price()
}

/// Comparison key for price orderings.
///
/// Purchasable books yield their effective price. Non-purchasable books yield
/// `i64::MAX` when ascending and `i64::MIN` when descending, standing in for
/// positive and negative infinity.
///
/// # Examples
///
/// ```
/// use get_my_books::Book;
/// use get_my_books::projection::{directional_price, PriceDirection};
///
/// let sold_out = Book { price: 9000, status: "품절".to_string(), ..Book::default() };
/// assert_eq!(directional_price(&sold_out, PriceDirection::Ascending), i64::MAX);
/// assert_eq!(directional_price(&sold_out, PriceDirection::Descending), i64::MIN);
/// ```
#[must_use]
pub fn directional_price(book: &Book, direction: PriceDirection) -> i64 {
    if book.is_purchasable() {
        return book.effective_price();
    }
    match direction {
        PriceDirection::Ascending => i64::MAX,
        PriceDirection::Descending => i64::MIN,
    }
}

/// Builds the predicate for a price range.
///
/// The predicate rejects non-purchasable books even for an unbounded range;
/// use [`filter_by_price`] to skip it when no filter is active.
pub fn price_filter(range: PriceRange) -> impl Fn(&Book) -> bool {
    move |book| book.is_purchasable() && range.contains(book.effective_price())
}

/// Projects `books` through `range`, preserving relative order.
///
/// An unbounded range returns every book, including non-purchasable ones.
#[must_use]
pub fn filter_by_price(books: &[Book], range: PriceRange) -> Vec<Book> {
    if range.is_unbounded() {
        return books.to_vec();
    }

    let keep = price_filter(range);
    let filtered: Vec<Book> = books.iter().filter(|&book| keep(book)).cloned().collect();

    tracing::trace!(
        total = books.len(),
        kept = filtered.len(),
        min = ?range.min,
        max = ?range.max,
        "price filter applied"
    );

    filtered
}
