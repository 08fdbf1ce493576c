//! Book domain model, sort orders and price ranges.
//!
//! A [`Book`] is an immutable record as returned by the book search API. The
//! core only inspects `title`, `price`, `sale_price` and `status`; every other
//! field is carried through for display.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::GetMyBooksError;

/// Status value marking a book as currently purchasable.
///
/// Books in any other status are excluded by every bounded price filter and
/// always sort last in price orderings.
pub const PURCHASABLE_STATUS: &str = "정상판매";

/// A single book record.
///
/// Missing and `null` fields decode to their defaults, and an empty
/// `datetime` string decodes to `None`, matching what the search API sends
/// for incomplete records.
///
/// # Examples
///
/// ```
/// use get_my_books::Book;
///
/// let book = Book {
///     title: "Programming Rust".to_string(),
///     price: 45000,
///     sale_price: 40500,
///     status: get_my_books::domain::PURCHASABLE_STATUS.to_string(),
///     ..Book::default()
/// };
/// assert!(book.is_purchasable());
/// assert_eq!(book.effective_price(), 40500);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub contents: String,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub datetime: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_as_default")]
    pub isbn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sale_price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub translators: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

impl Book {
    /// Returns `true` if the book's status is [`PURCHASABLE_STATUS`].
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.status == PURCHASABLE_STATUS
    }

    /// Price a buyer pays: `sale_price` when discounted, otherwise `price`.
    ///
    /// Ignores status; callers gate on [`Book::is_purchasable`] themselves.
    #[must_use]
    pub const fn effective_price(&self) -> i64 {
        if self.sale_price > 0 {
            self.sale_price
        } else {
            self.price
        }
    }

    /// Returns `true` if the book carries a discount.
    #[must_use]
    pub const fn is_discounted(&self) -> bool {
        self.sale_price > 0
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => DateTime::parse_from_rfc3339(text)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Active sort order of the projection.
///
/// `Default` means no explicit sort: the projection keeps the order of the
/// fetched result set, filtered by price only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Default,
    LowPrice,
    HighPrice,
    TitleAsc,
    TitleDesc,
}

impl SortOrder {
    /// All orders, in the order a UI would list them.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::LowPrice,
        Self::HighPrice,
        Self::TitleAsc,
        Self::TitleDesc,
    ];

    /// Wire name of the order (`"lowPrice"`, `"titleDesc"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::LowPrice => "lowPrice",
            Self::HighPrice => "highPrice",
            Self::TitleAsc => "titleAsc",
            Self::TitleDesc => "titleDesc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = GetMyBooksError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s.trim())
            .ok_or_else(|| GetMyBooksError::Config(format!("unknown sort order: {s}")))
    }
}

/// Inclusive price bounds; a `None` side is unbounded.
///
/// # Examples
///
/// ```
/// use get_my_books::PriceRange;
///
/// let range = PriceRange::between(10_000, 20_000);
/// assert!(range.contains(10_000));
/// assert!(!range.contains(20_001));
/// assert!(PriceRange::UNBOUNDED.is_unbounded());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl PriceRange {
    /// The range that excludes nothing.
    pub const UNBOUNDED: Self = Self { min: None, max: None };

    #[must_use]
    pub const fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn between(min: i64, max: i64) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// Returns `true` only when both sides are unbounded.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[must_use]
    pub fn contains(&self, price: i64) -> bool {
        self.min.map_or(true, |min| min <= price) && self.max.map_or(true, |max| price <= max)
    }
}
