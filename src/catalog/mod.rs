//! # Catalog
//!
//! Owns the book list and keeps the three core structures in step with it:
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │                           Catalog                             │
//!   │                                                               │
//!   │   books: Vec<Book>          (source of truth, insertion order)│
//!   │      │                                                        │
//!   │      ├──► PrefixIndex            lowercased titles + authors  │
//!   │      ├──► BoundedRecentCache     id → Book, read-through      │
//!   │      └──► KeyedHeapSort          on demand, over a copy       │
//!   └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Catalog` is an ordinary owned value built with
//! [`CatalogBuilder`](crate::builder::CatalogBuilder); there is no global
//! instance. The recent cache is never part of a [`snapshot`](Catalog::snapshot).
pub mod book;

use std::collections::BTreeMap;

use tracing::debug;

pub use book::{Book, BookId, BookStatus, NewBook};

use crate::ds::PrefixIndex;
use crate::error::{CatalogError, SortError};
use crate::policy::BoundedRecentCache;
use crate::sort::{KeyedHeapSort, SortDirection, SortField};

/// In-memory library catalog.
#[derive(Debug)]
pub struct Catalog {
    books: Vec<Book>,
    suggestions: PrefixIndex,
    recent: BoundedRecentCache<BookId, Book>,
    recommendation_limit: usize,
}

impl Catalog {
    pub(crate) fn from_parts(
        books: Vec<Book>,
        recent: BoundedRecentCache<BookId, Book>,
        recommendation_limit: usize,
    ) -> Self {
        let mut suggestions = PrefixIndex::new();
        for book in &books {
            index_book(&mut suggestions, book);
        }
        Self {
            books,
            suggestions,
            recent,
            recommendation_limit,
        }
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The recently viewed books cache.
    pub fn recent(&self) -> &BoundedRecentCache<BookId, Book> {
        &self.recent
    }

    /// Adds a book and returns its new id, one past the highest id present.
    ///
    /// # Errors
    ///
    /// [`CatalogError::IdsExhausted`] if a stored book already has id
    /// `u64::MAX`. The catalog is left unchanged.
    pub fn add_book(&mut self, new_book: NewBook) -> Result<BookId, CatalogError> {
        let id = match self.books.iter().map(|b| b.id).max() {
            Some(max) => max.checked_add(1).ok_or(CatalogError::IdsExhausted)?,
            None => 1,
        };

        let book = new_book.into_book(id);
        index_book(&mut self.suggestions, &book);
        debug!(id, title = %book.title, "added book");
        self.books.push(book);
        Ok(id)
    }

    /// Removes a book by id.
    ///
    /// Its title and author stay in the suggestion index.
    pub fn remove_book(&mut self, id: BookId) -> Option<Book> {
        let pos = self.position(id)?;
        let book = self.books.remove(pos);
        self.recent.remove(&id);
        debug!(id, "removed book");
        Some(book)
    }

    /// Flips a book between available and borrowed, returning the new status.
    pub fn toggle_status(&mut self, id: BookId) -> Option<BookStatus> {
        let pos = self.position(id)?;
        let book = &mut self.books[pos];
        book.status = book.status.toggled();
        let status = book.status;
        if self.recent.contains(&id) {
            self.recent.put(id, book.clone());
        }
        debug!(id, %status, "toggled book status");
        Some(status)
    }

    /// Looks a book up by id, going through the recent cache.
    ///
    /// A hit refreshes the entry's recency; a miss loads it from the list.
    pub fn book(&mut self, id: BookId) -> Option<&Book> {
        if !self.recent.contains(&id) {
            let book = self.books.iter().find(|b| b.id == id)?.clone();
            self.recent.put(id, book);
        }
        self.recent.get(&id)
    }

    /// Case-insensitive substring search over title, author, isbn and
    /// description. A blank query returns every book.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.books.iter().collect();
        }
        self.books
            .iter()
            .filter(|book| book.matches_lowercase(&query))
            .collect()
    }

    /// Books matching both filters; `None` matches everything.
    pub fn filter(&self, category: Option<&str>, status: Option<BookStatus>) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| category.is_none_or(|c| book.category == c))
            .filter(|book| status.is_none_or(|s| book.status == s))
            .collect()
    }

    /// Exact isbn lookup by binary search over an isbn-ordered view.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        let mut by_isbn: Vec<&Book> = self.books.iter().collect();
        by_isbn.sort_unstable_by(|a, b| a.isbn.cmp(&b.isbn));
        by_isbn
            .binary_search_by(|book| book.isbn.as_str().cmp(isbn))
            .ok()
            .map(|idx| by_isbn[idx])
    }

    /// Books related to `id` by category or author, best first.
    ///
    /// Same category scores 2, same author scores 1. Ties keep list order.
    pub fn recommendations(&self, id: BookId) -> Vec<&Book> {
        let Some(target) = self.books.iter().find(|b| b.id == id) else {
            return Vec::new();
        };

        let mut scored: Vec<(u8, &Book)> = self
            .books
            .iter()
            .filter(|b| b.id != id)
            .filter_map(|b| {
                let score = 2 * u8::from(b.category == target.category)
                    + u8::from(b.author == target.author);
                (score > 0).then_some((score, b))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(self.recommendation_limit)
            .map(|(_, book)| book)
            .collect()
    }

    /// Search suggestions for a typed prefix.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        self.suggestions.suggestions(prefix)
    }

    pub fn suggestion_index(&self) -> &PrefixIndex {
        &self.suggestions
    }

    /// Returns the books ordered by `field` in `direction`.
    pub fn sorted(&self, field: SortField, direction: SortDirection) -> Vec<Book> {
        let mut books = self.books.clone();
        // Book yields a value of one fixed kind for every SortField.
        KeyedHeapSort::new(field, direction).sort_unchecked(&mut books);
        books
    }

    /// Like [`sorted`](Self::sorted) with the field given by name.
    pub fn sorted_by_name(
        &self,
        field: &str,
        direction: SortDirection,
    ) -> Result<Vec<Book>, SortError> {
        KeyedHeapSort::by_name(field, direction)?.sort(&self.books)
    }

    /// Serializes the books as a JSON object keyed by id.
    pub fn snapshot(&self) -> Result<String, CatalogError> {
        let map: BTreeMap<BookId, &Book> = self.books.iter().map(|b| (b.id, b)).collect();
        Ok(serde_json::to_string(&map)?)
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }
}

fn index_book(index: &mut PrefixIndex, book: &Book) {
    index.insert(&book.title);
    index.insert(&book.author);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CatalogBuilder;

    fn seed() -> Vec<NewBook> {
        [
            ("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", "978-0743273565", 1925),
            ("To Kill a Mockingbird", "Harper Lee", "Fiction", "978-0446310789", 1960),
            ("1984", "George Orwell", "Fiction", "978-0451524935", 1949),
            ("Animal Farm", "George Orwell", "Fiction", "978-0451526342", 1945),
            ("A Brief History of Time", "Stephen Hawking", "Science", "978-0553380163", 1988),
            ("The Histories", "Herodotus", "History", "978-0140449082", -440),
        ]
        .into_iter()
        .map(|(title, author, category, isbn, year)| {
            NewBook::new(title, author, category, isbn, year)
        })
        .collect()
    }

    fn dune() -> NewBook {
        NewBook::new("Dune", "Frank Herbert", "Fiction", "978-0441013593", 1965)
    }

    fn catalog(capacity: usize) -> Catalog {
        CatalogBuilder::new()
            .cache_capacity(capacity)
            .new_books(seed())
            .try_build()
            .unwrap()
    }

    #[test]
    fn ids_are_assigned_sequentially() {
        let mut catalog = catalog(4);
        let ids: Vec<_> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog.add_book(dune()).unwrap(), 7);

        catalog.remove_book(7);
        catalog.remove_book(6);
        assert_eq!(catalog.add_book(dune()).unwrap(), 6);
    }

    #[test]
    fn add_book_after_highest_possible_id_is_an_error() {
        let last = NewBook::new("Emma", "Jane Austen", "Fiction", "978-0141439587", 1815)
            .into_book(u64::MAX);
        let mut catalog = CatalogBuilder::new().books([last]).try_build().unwrap();

        let err = catalog.add_book(dune()).unwrap_err();
        assert!(matches!(err, CatalogError::IdsExhausted));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.suggestions("dune").is_empty());
    }

    #[test]
    fn added_books_become_suggestions() {
        let mut catalog = catalog(4);
        assert!(catalog.suggestions("dune").is_empty());
        catalog.add_book(dune()).unwrap();
        assert_eq!(catalog.suggestions("Du"), vec!["dune"]);
        assert_eq!(catalog.suggestions("frank"), vec!["frank herbert"]);
    }

    #[test]
    fn suggestions_cover_titles_and_authors() {
        let catalog = catalog(4);
        assert_eq!(catalog.suggestions("george"), vec!["george orwell"]);
        assert_eq!(
            catalog.suggestions("the"),
            vec!["the great gatsby", "the histories"]
        );
        assert_eq!(catalog.suggestion_index().len(), 11);
    }

    #[test]
    fn remove_drops_book_and_cached_copy() {
        let mut catalog = catalog(4);
        assert!(catalog.book(2).is_some());
        assert!(catalog.recent().contains(&2));

        let removed = catalog.remove_book(2).unwrap();
        assert_eq!(removed.title, "To Kill a Mockingbird");
        assert!(!catalog.recent().contains(&2));
        assert!(catalog.book(2).is_none());
        assert!(catalog.remove_book(2).is_none());
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn toggle_flips_status_and_refreshes_cache() {
        let mut catalog = catalog(4);
        catalog.book(1);
        assert_eq!(catalog.toggle_status(1), Some(BookStatus::Borrowed));
        assert_eq!(
            catalog.recent().peek(&1).map(|b| b.status),
            Some(BookStatus::Borrowed)
        );
        assert_eq!(catalog.toggle_status(1), Some(BookStatus::Available));
        assert_eq!(catalog.toggle_status(99), None);
    }

    #[test]
    fn book_lookup_goes_through_recent_cache() {
        let mut catalog = catalog(2);
        catalog.book(1);
        catalog.book(2);
        catalog.book(1);
        catalog.book(3);
        assert_eq!(catalog.recent().keys_lru_to_mru(), vec![1, 3]);
        assert!(catalog.book(42).is_none());
        assert_eq!(catalog.recent().len(), 2);
    }

    #[test]
    fn search_matches_substrings_case_insensitively() {
        let catalog = catalog(4);
        let titles: Vec<_> = catalog.search("ORWELL").iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["1984", "Animal Farm"]);
        assert_eq!(catalog.search("0553").len(), 1);
        assert_eq!(catalog.search("   ").len(), 6);
        assert!(catalog.search("tolkien").is_empty());
    }

    #[test]
    fn filter_by_category_and_status() {
        let mut catalog = catalog(4);
        catalog.toggle_status(3);
        assert_eq!(catalog.filter(Some("Fiction"), None).len(), 4);
        assert_eq!(
            catalog.filter(Some("Fiction"), Some(BookStatus::Available)).len(),
            3
        );
        assert_eq!(catalog.filter(None, Some(BookStatus::Borrowed))[0].id, 3);
        assert_eq!(catalog.filter(None, None).len(), 6);
        assert!(catalog.filter(Some("Poetry"), None).is_empty());
    }

    #[test]
    fn isbn_binary_search() {
        let catalog = catalog(4);
        assert_eq!(catalog.find_by_isbn("978-0451524935").map(|b| b.id), Some(3));
        assert_eq!(catalog.find_by_isbn("978-0140449082").map(|b| b.id), Some(6));
        assert!(catalog.find_by_isbn("000").is_none());
    }

    #[test]
    fn recommendations_rank_author_and_category() {
        let catalog = catalog(4);
        // 1984: Animal Farm shares category + author (3); the other fiction shares category (2).
        let ids: Vec<_> = catalog.recommendations(3).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4, 1, 2]);
        assert!(catalog.recommendations(6).is_empty());
        assert!(catalog.recommendations(99).is_empty());
    }

    #[test]
    fn recommendations_respect_limit() {
        let catalog = CatalogBuilder::new()
            .recommendation_limit(1)
            .new_books(seed())
            .try_build()
            .unwrap();
        assert_eq!(catalog.recommendations(3).len(), 1);
    }

    #[test]
    fn sorted_by_year_descending() {
        let catalog = catalog(4);
        let years: Vec<_> = catalog
            .sorted(SortField::PublishedYear, SortDirection::Descending)
            .iter()
            .map(|b| b.published_year)
            .collect();
        assert_eq!(years, vec![1988, 1960, 1949, 1945, 1925, -440]);
        // Underlying order is untouched.
        assert_eq!(catalog.books()[0].published_year, 1925);
    }

    #[test]
    fn sorted_orders_every_field_both_ways() {
        let catalog = catalog(4);
        for field in SortField::ALL {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let sorted = catalog.sorted(field, direction);
                assert_eq!(sorted.len(), catalog.len());
                assert!(KeyedHeapSort::new(field, direction).is_sorted(&sorted));
            }
        }
    }

    #[test]
    fn sorted_by_name_rejects_unknown_field() {
        let catalog = catalog(4);
        assert!(catalog.sorted_by_name("category", SortDirection::Ascending).is_err());
        let titles: Vec<_> = catalog
            .sorted_by_name("title", SortDirection::Ascending)
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles.first().map(String::as_str), Some("1984"));
    }

    #[test]
    fn snapshot_maps_id_to_record() {
        let mut catalog = catalog(4);
        catalog.book(1);
        let text = catalog.snapshot().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 6);
        assert_eq!(map["3"]["title"], "1984");
        assert_eq!(map["6"]["publishedYear"], -440);
    }
}
