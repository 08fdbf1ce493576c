//! Book source abstraction.
//!
//! [`BookSource`] is the seam between the store and whatever actually retrieves
//! books. The crate ships [`CatalogSource`], which answers queries from a local
//! JSON catalog with the same paging behavior as the search API.

use std::path::Path;

use super::messages::{BookPage, PageMeta};
use crate::domain::{Book, FetchError, Result};

/// Default number of documents per page, matching the search API default.
pub const DEFAULT_SOURCE_PAGE_SIZE: usize = 10;

/// Anything that can return one page of books for a query.
///
/// Pages are numbered from 1. Implementations report failures as
/// [`FetchError`] values; they are stored in the search state as-is.
///
/// # Examples
///
/// ```
/// use get_my_books::fetch::{BookSource, CatalogSource};
/// use get_my_books::Book;
///
/// let source = CatalogSource::new(vec![Book { title: "Rust in Action".into(), ..Book::default() }]);
/// let page = source.fetch_page("rust", 1)?;
/// assert_eq!(page.documents.len(), 1);
/// assert!(page.meta.is_end);
/// # Ok::<(), get_my_books::FetchError>(())
/// ```
pub trait BookSource {
    /// Fetches page `page` of the results for `query`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the page cannot be produced.
    fn fetch_page(&self, query: &str, page: u32) -> std::result::Result<BookPage, FetchError>;
}

/// In-memory catalog searched by case-insensitive substring match.
///
/// A book matches when the query occurs in its title, any author, its
/// publisher or its ISBN.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    books: Vec<Book>,
    page_size: usize,
}

impl CatalogSource {
    #[must_use]
    pub const fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            page_size: DEFAULT_SOURCE_PAGE_SIZE,
        }
    }

    /// Overrides the page size; zero is clamped to one.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Loads a catalog from a JSON file holding an array of books.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// book records.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading book catalog");

        let raw = std::fs::read_to_string(path)?;
        let books: Vec<Book> = serde_json::from_str(&raw)?;

        tracing::debug!(books = books.len(), "book catalog loaded");
        Ok(Self::new(books))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn matches(book: &Book, needle: &str) -> bool {
        book.title.to_lowercase().contains(needle)
            || book.authors.iter().any(|author| author.to_lowercase().contains(needle))
            || book.publisher.to_lowercase().contains(needle)
            || book.isbn.contains(needle)
    }
}

impl BookSource for CatalogSource {
    fn fetch_page(&self, query: &str, page: u32) -> std::result::Result<BookPage, FetchError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(FetchError::Request("query must not be empty".to_string()));
        }
        if page == 0 {
            return Err(FetchError::Request("page numbers start at 1".to_string()));
        }

        let matching: Vec<&Book> = self.books.iter().filter(|book| Self::matches(book, &needle)).collect();

        let start = (page as usize - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(matching.len());
        let documents: Vec<Book> = matching
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|&book| book.clone())
            .collect();

        Ok(BookPage {
            documents,
            meta: PageMeta {
                is_end: end >= matching.len(),
                pageable_count: matching.len(),
                total_count: matching.len(),
            },
        })
    }
}
