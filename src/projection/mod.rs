//! Pure projection functions behind `filtered_books`.
//!
//! The reducer never touches book prices or titles directly. It asks this
//! module to filter a result set by a [`PriceRange`](crate::PriceRange) and to
//! order it by a [`SortOrder`](crate::SortOrder).
//!
//! - [`price`]: effective and directional price, the price-range predicate
//! - [`order`]: comparators and the stable sort

pub mod order;
pub mod price;

#[cfg(test)]
mod tests;

pub use order::{by_high_price, by_low_price, by_title_asc, by_title_desc, comparator, sort_books, Comparator};
pub use price::{directional_price, effective_price, filter_by_price, price_filter, PriceDirection};
