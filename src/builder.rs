//! Catalog construction.
//!
//! Collects seed records and cache settings, then validates everything in
//! [`try_build`](CatalogBuilder::try_build).
//!
//! ## Example
//!
//! ```rust
//! use shelfkit::builder::CatalogBuilder;
//! use shelfkit::catalog::NewBook;
//!
//! let mut catalog = CatalogBuilder::new()
//!     .cache_capacity(10)
//!     .new_books([NewBook::new("Dune", "Frank Herbert", "Fiction", "978-0441013593", 1965)])
//!     .try_build()
//!     .unwrap();
//!
//! assert_eq!(catalog.suggestions("du"), vec!["dune".to_string()]);
//! assert_eq!(catalog.book(1).map(|b| b.title.as_str()), Some("Dune"));
//! ```

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::catalog::{Book, BookId, Catalog, NewBook};
use crate::error::{CatalogError, ConfigError};
use crate::policy::BoundedRecentCache;

/// Recently viewed books kept by default.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Recommendations returned by default.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Builder for [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    cache_capacity: usize,
    recommendation_limit: usize,
    books: Vec<Book>,
    new_books: Vec<NewBook>,
    snapshot: Option<String>,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            books: Vec::new(),
            new_books: Vec::new(),
            snapshot: None,
        }
    }

    /// Sets the recent cache capacity. Zero is rejected by `try_build`.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }

    /// Seeds records that already carry ids.
    pub fn books(mut self, books: impl IntoIterator<Item = Book>) -> Self {
        self.books.extend(books);
        self
    }

    /// Seeds records that get ids assigned after every other source.
    pub fn new_books(mut self, books: impl IntoIterator<Item = NewBook>) -> Self {
        self.new_books.extend(books);
        self
    }

    /// Restores records from text produced by [`Catalog::snapshot`].
    ///
    /// Parsing happens in `try_build`.
    pub fn snapshot(mut self, text: impl Into<String>) -> Self {
        self.snapshot = Some(text.into());
        self
    }

    /// Validates the configuration and builds the catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Config`] for zero cache capacity, duplicate ids, or a
    ///   snapshot key that disagrees with its record's id.
    /// - [`CatalogError::IdsExhausted`] if seed books without ids follow a
    ///   record with id `u64::MAX`.
    /// - [`CatalogError::Snapshot`] if the snapshot text is not valid JSON of
    ///   the expected shape.
    pub fn try_build(self) -> Result<Catalog, CatalogError> {
        let recent = BoundedRecentCache::try_new(self.cache_capacity)?;

        let mut books = Vec::with_capacity(self.books.len() + self.new_books.len());
        if let Some(text) = &self.snapshot {
            let restored: BTreeMap<BookId, Book> = serde_json::from_str(text)?;
            debug!(count = restored.len(), "restoring catalog snapshot");
            for (key, book) in restored {
                if key != book.id {
                    return Err(ConfigError::new(format!(
                        "snapshot key {key} does not match record id {}",
                        book.id
                    ))
                    .into());
                }
                books.push(book);
            }
        }
        books.extend(self.books);

        let mut seen = FxHashSet::default();
        for book in &books {
            if !seen.insert(book.id) {
                return Err(ConfigError::new(format!("duplicate book id {}", book.id)).into());
            }
        }

        let mut catalog = Catalog::from_parts(books, recent, self.recommendation_limit);
        for new_book in self.new_books {
            catalog.add_book(new_book)?;
        }
        debug!(
            books = catalog.len(),
            cache_capacity = self.cache_capacity,
            "catalog built"
        );
        Ok(catalog)
    }
}
