//! Comparators for the four explicit sort orders.
//!
//! All sorting goes through [`sort_books`], which uses the stable
//! `slice::sort_by`, so ties keep their prior relative order.

use std::cmp::Ordering;

use super::price::{directional_price, PriceDirection};
use crate::domain::{Book, SortOrder};

/// Comparator signature shared by every ordering.
pub type Comparator = fn(&Book, &Book) -> Ordering;

/// Cheapest first; non-purchasable books last.
#[must_use]
pub fn by_low_price(a: &Book, b: &Book) -> Ordering {
    directional_price(a, PriceDirection::Ascending).cmp(&directional_price(b, PriceDirection::Ascending))
}

/// Most expensive first; non-purchasable books last.
#[must_use]
pub fn by_high_price(a: &Book, b: &Book) -> Ordering {
    directional_price(b, PriceDirection::Descending).cmp(&directional_price(a, PriceDirection::Descending))
}

/// Title in ordinal code-point order.
#[must_use]
pub fn by_title_asc(a: &Book, b: &Book) -> Ordering {
    a.title.cmp(&b.title)
}

#[must_use]
pub fn by_title_desc(a: &Book, b: &Book) -> Ordering {
    b.title.cmp(&a.title)
}

/// Returns the comparator for `order`, or `None` for [`SortOrder::Default`].
#[must_use]
pub fn comparator(order: SortOrder) -> Option<Comparator> {
    match order {
        SortOrder::Default => None,
        SortOrder::LowPrice => Some(by_low_price),
        SortOrder::HighPrice => Some(by_high_price),
        SortOrder::TitleAsc => Some(by_title_asc),
        SortOrder::TitleDesc => Some(by_title_desc),
    }
}

/// Sorts `books` in place by `order`. [`SortOrder::Default`] leaves them as is.
///
/// # Examples
///
/// ```
/// use get_my_books::{Book, SortOrder};
/// use get_my_books::projection::sort_books;
///
/// let mut books = vec![
///     Book { title: "b".to_string(), ..Book::default() },
///     Book { title: "a".to_string(), ..Book::default() },
/// ];
/// sort_books(&mut books, SortOrder::TitleAsc);
/// assert_eq!(books[0].title, "a");
/// ```
pub fn sort_books(books: &mut [Book], order: SortOrder) {
    if let Some(compare) = comparator(order) {
        books.sort_by(compare);
    }
}
