//! Catalog records.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sort::{FieldValue, SortField, SortRecord};

/// Identifier assigned by the catalog.
pub type BookId = u64;

/// Lending state of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

impl BookStatus {
    /// Returns the opposite state.
    pub fn toggled(self) -> Self {
        match self {
            BookStatus::Available => BookStatus::Borrowed,
            BookStatus::Borrowed => BookStatus::Available,
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BookStatus::Available => "available",
            BookStatus::Borrowed => "borrowed",
        })
    }
}

/// A catalog entry.
///
/// `published_year` is negative for works dated BCE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub isbn: String,
    #[serde(default)]
    pub status: BookStatus,
    #[serde(default)]
    pub description: String,
    pub published_year: i32,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// Case-insensitive substring match against title, author, isbn and
    /// description. `query` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, query: &str) -> bool {
        [&self.title, &self.author, &self.isbn, &self.description]
            .iter()
            .any(|text| text.to_lowercase().contains(query))
    }
}

impl SortRecord for Book {
    fn field(&self, field: SortField) -> Option<FieldValue<'_>> {
        Some(match field {
            SortField::Title => FieldValue::Text(&self.title),
            SortField::Author => FieldValue::Text(&self.author),
            SortField::PublishedYear => FieldValue::Number(i64::from(self.published_year)),
        })
    }
}

/// Fields supplied when adding a book; the catalog assigns id and status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub isbn: String,
    #[serde(default)]
    pub description: String,
    pub published_year: i32,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        isbn: impl Into<String>,
        published_year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category: category.into(),
            isbn: isbn.into(),
            description: String::new(),
            published_year,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            category: self.category,
            isbn: self.isbn,
            status: BookStatus::Available,
            description: self.description,
            published_year: self.published_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gatsby() -> Book {
        NewBook::new(
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "Fiction",
            "978-0743273565",
            1925,
        )
        .with_description("A story of the fabulously wealthy Jay Gatsby.")
        .into_book(1)
    }

    #[test]
    fn new_books_start_available() {
        let book = gatsby();
        assert_eq!(book.id, 1);
        assert!(book.is_available());
        assert_eq!(book.status.toggled(), BookStatus::Borrowed);
        assert_eq!(book.status.toggled().toggled(), BookStatus::Available);
    }

    #[test]
    fn serializes_with_catalog_field_names() {
        let json = serde_json::to_value(gatsby()).unwrap();
        assert_eq!(json["publishedYear"], 1925);
        assert_eq!(json["status"], "available");
        assert!(json.get("published_year").is_none());
    }

    #[test]
    fn missing_status_and_description_default() {
        let book: Book = serde_json::from_str(
            r#"{"id":3,"title":"1984","author":"George Orwell","category":"Fiction",
                "isbn":"978-0451524935","publishedYear":1949}"#,
        )
        .unwrap();
        assert_eq!(book.status, BookStatus::Available);
        assert!(book.description.is_empty());
    }

    #[test]
    fn substring_match_covers_all_text_fields() {
        let book = gatsby();
        assert!(book.matches_lowercase("gatsby"));
        assert!(book.matches_lowercase("fitzgerald"));
        assert!(book.matches_lowercase("0743"));
        assert!(book.matches_lowercase("wealthy"));
        assert!(!book.matches_lowercase("orwell"));
    }

    #[test]
    fn exposes_every_sort_field() {
        let book = gatsby();
        assert_eq!(
            book.field(SortField::Title),
            Some(FieldValue::Text("The Great Gatsby"))
        );
        assert_eq!(
            book.field(SortField::PublishedYear),
            Some(FieldValue::Number(1925))
        );
    }
}
