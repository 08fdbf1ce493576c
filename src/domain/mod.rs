//! Domain layer for the book search core.
//!
//! Plain data types shared by every other layer, free of I/O:
//!
//! - [`book`]: the `Book` record, `SortOrder` and `PriceRange`
//! - [`error`]: fetch and crate error types with the `Result` alias
//!
//! # Examples
//!
//! ```
//! use get_my_books::domain::{PriceRange, SortOrder};
//!
//! let order: SortOrder = "lowPrice".parse()?;
//! assert_eq!(order, SortOrder::LowPrice);
//! assert!(PriceRange::default().is_unbounded());
//! # Ok::<(), get_my_books::GetMyBooksError>(())
//! ```

pub mod book;
pub mod error;

pub use book::{Book, PriceRange, SortOrder, PURCHASABLE_STATUS};
pub use error::{FetchError, GetMyBooksError, Result};
