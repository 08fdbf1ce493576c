//! Error types for the book search core.
//!
//! Two error types live here. [`FetchError`] is the failure reported by the
//! fetch collaborator and is the only error ever stored in
//! [`SearchState`](crate::app::SearchState). [`GetMyBooksError`] covers
//! everything around the core: reading catalogs and config files, parsing
//! configuration values. Both are implemented with `thiserror`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure outcome of a book fetch.
///
/// Stored verbatim in the search state so the UI can show what went wrong, so
/// it is cheap to clone and comparable.
///
/// # Examples
///
/// ```
/// use get_my_books::FetchError;
///
/// let err = FetchError::Transport("connection reset".to_string());
/// assert_eq!(err.to_string(), "transport failure: connection reset");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FetchError {
    /// The source rejected the request (bad page number, empty query).
    #[error("request rejected: {0}")]
    Request(String),

    /// The source could not be reached or read.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The source answered with something that is not a book page.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Crate-level error for operations outside the reducer.
///
/// # Examples
///
/// ```
/// use get_my_books::GetMyBooksError;
///
/// fn validate() -> Result<(), GetMyBooksError> {
///     Err(GetMyBooksError::Config("page_size must be positive".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum GetMyBooksError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document (catalog, event) could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML configuration file could not be decoded.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A fetch failed outside of the store, e.g. while probing a source.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// A specialized `Result` type for crate operations.
pub type Result<T> = std::result::Result<T, GetMyBooksError>;
