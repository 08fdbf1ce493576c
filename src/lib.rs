//! get-my-books: the search-result state core of a book search client.
//!
//! Given a query, the crate tracks fetched results and derives the filtered,
//! sorted view shown to the user:
//! - Fetch lifecycle (loading, success, failure) driven by discrete events
//! - Price-range filtering gated on purchasable status
//! - Stable multi-key sorting (price ascending/descending, title ascending/descending)
//! - Incremental display paging over the collected result set
//! - Request identity, so late results for an abandoned query never land

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command-line shell (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Events and the pure transition function          │
//! │  - Store with request bookkeeping                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Projection    │   │ Fetch Layer   │   │ UI Layer      │
//! │ (projection/) │   │ (fetch/)      │   │ (ui/)         │
//! │ - Price rules │   │ - Sources     │   │ - View models │
//! │ - Comparators │   │ - Collection  │   │ - Formatting  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Book, SortOrder, PriceRange (domain/)            │
//! │  - Error types (domain/error)                       │
//! │  - Path helpers (infrastructure/)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber with env filter               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: search state, events, transition function and store
//! - [`projection`]: price predicate, price keys and comparators
//! - [`domain`]: core types (Book, SortOrder, PriceRange, errors)
//! - [`fetch`]: book sources and page collection
//! - [`ui`]: view models and text rendering
//! - [`infrastructure`]: path helpers
//! - [`observability`]: tracing setup
//!
//! # Configuration
//!
//! Configuration comes from a TOML file or from `key=value` pairs:
//!
//! ```toml
//! catalog_path = "~/books/catalog.json"
//! page_size = 10
//! max_pages = 50
//! trace_level = "debug"
//! ```
//!
//! # Search Flow
//!
//! 1. **Query**: `SearchStore::submit_query` trims the input and dispatches
//!    `SetQuery`, which resets the state, marks it loading and emits
//!    `Action::FetchBooks`.
//! 2. **Fetch**: the caller runs the action; `fetch_all` walks every page of
//!    the source.
//! 3. **Receive**: `SearchStore::receive` applies the response if it answers the
//!    in-flight request and drops it otherwise.
//! 4. **Refine**: `SetPrice`, `SortBooks` and `LoadMoreBooks` reshape the
//!    projection without fetching.
//!
//! # Example
//!
//! ```rust
//! use get_my_books::fetch::{run_actions, CatalogSource};
//! use get_my_books::{initialize, Book, Config, Event, PriceRange, SortOrder};
//!
//! let source = CatalogSource::new(vec![
//!     Book { title: "Rust Atomics".into(), price: 30000, status: "정상판매".into(), ..Book::default() },
//!     Book { title: "Rust for Rustaceans".into(), price: 25000, status: "정상판매".into(), ..Book::default() },
//! ]);
//!
//! let config = Config::default();
//! let mut store = initialize(&config);
//!
//! let (_, actions) = store.submit_query("rust");
//! run_actions(&mut store, &source, actions, config.max_pages);
//!
//! store.dispatch(Event::SetPrice(PriceRange::between(20000, 28000)));
//! store.dispatch(Event::SortBooks(SortOrder::TitleAsc));
//!
//! let visible = store.state().filtered_books.as_deref().unwrap_or_default();
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].title, "Rust for Rustaceans");
//! ```

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod projection;
pub mod ui;

pub mod observability;

pub use app::{apply, Action, Event, SearchState, SearchStore};
pub use domain::{Book, FetchError, GetMyBooksError, PriceRange, Result, SortOrder};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default number of books revealed per display page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Runtime configuration.
///
/// # Example
///
/// ```toml
/// catalog_path = "~/books/catalog.json"
/// page_size = 20
/// max_pages = 10
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON catalog served by [`fetch::CatalogSource`].
    ///
    /// A leading `~` is expanded to the home directory.
    pub catalog_path: Option<String>,

    /// Books revealed per display page. Default: 10
    pub page_size: usize,

    /// Maximum pages collected per fetch. Default: 50
    pub max_pages: u32,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: fetch::DEFAULT_MAX_PAGES,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog` or `catalog_path`: String → `Option<String>`
    /// - `page_size`: String → `usize` (falls back to 10 on parse error or zero)
    /// - `max_pages`: String → `u32` (falls back to 50 on parse error or zero)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use get_my_books::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog".to_string(), "books.json".to_string());
    /// map.insert("page_size".to_string(), "20".to_string());
    /// map.insert("max_pages".to_string(), "nope".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.catalog_path.as_deref(), Some("books.json"));
    /// assert_eq!(config.page_size, 20);
    /// assert_eq!(config.max_pages, 50);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.page_size);

        let max_pages = config
            .get("max_pages")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.max_pages);

        Self {
            catalog_path: config.get("catalog").or_else(|| config.get("catalog_path")).cloned(),
            page_size,
            max_pages,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Loads configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or sets
    /// `page_size` or `max_pages` to zero.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration file");

        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that the type system does not.
    ///
    /// # Errors
    ///
    /// Returns [`GetMyBooksError::Config`] for a zero `page_size` or `max_pages`.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(GetMyBooksError::Config("page_size must be positive".to_string()));
        }
        if self.max_pages == 0 {
            return Err(GetMyBooksError::Config("max_pages must be positive".to_string()));
        }
        Ok(())
    }

    /// Catalog location with `~` expanded.
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path.as_deref().map(infrastructure::expand_tilde)
    }
}

/// Creates a store for `config`.
///
/// The store starts in the initial state: no query, no results, default order,
/// unbounded price range.
///
/// # Example
///
/// ```rust
/// use get_my_books::{initialize, Config};
///
/// let store = initialize(&Config { page_size: 20, ..Default::default() });
/// assert_eq!(store.page_size(), 20);
/// assert!(store.state().books.is_none());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> SearchStore {
    tracing::debug!(
        page_size = config.page_size,
        max_pages = config.max_pages,
        catalog = ?config.catalog_path,
        "initializing search store"
    );

    SearchStore::new(config.page_size)
}
