//! # Keyed Heap Sort
//!
//! Orders records by one selected field in either direction, using the
//! in-place max-heap sort from [`ds::heap`](crate::ds::heap).
//!
//! ## Architecture
//!
//! ```text
//!   KeyedHeapSort { field, direction, collation }
//!        │
//!        │  1. validate: every record yields a value for `field`,
//!        │     all of the same kind (text or number)
//!        ▼
//!   compare(a, b) = direction.apply(collation.cmp(a.field, b.field))
//!        │
//!        │  2. heap_sort_by(records, compare)   O(n log n), O(1) space
//!        ▼
//!   records ordered by `field`, ties in unspecified order
//! ```
//!
//! Validation runs before any element moves, so a rejected sort leaves the
//! input exactly as it was.
//!
//! ## Example Usage
//!
//! ```
//! use shelfkit::sort::{FieldValue, KeyedHeapSort, SortDirection, SortField, SortRecord};
//!
//! #[derive(Clone)]
//! struct Row { title: &'static str, year: i64 }
//!
//! impl SortRecord for Row {
//!     fn field(&self, field: SortField) -> Option<FieldValue<'_>> {
//!         match field {
//!             SortField::Title => Some(FieldValue::Text(self.title)),
//!             SortField::PublishedYear => Some(FieldValue::Number(self.year)),
//!             SortField::Author => None,
//!         }
//!     }
//! }
//!
//! let rows = vec![
//!     Row { title: "Gatsby", year: 1925 },
//!     Row { title: "Mockingbird", year: 1960 },
//!     Row { title: "Pride", year: 1813 },
//! ];
//!
//! let sorter = KeyedHeapSort::new(SortField::PublishedYear, SortDirection::Descending);
//! let sorted = sorter.sort(&rows).unwrap();
//! let years: Vec<_> = sorted.iter().map(|r| r.year).collect();
//! assert_eq!(years, [1960, 1925, 1813]);
//!
//! // Authors are not exposed by `Row`, so the sort is rejected.
//! assert!(KeyedHeapSort::new(SortField::Author, SortDirection::Ascending).sort(&rows).is_err());
//! ```
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::ds::heap::heap_sort_by;
use crate::error::SortError;

/// Fields a record can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Title,
    Author,
    PublishedYear,
}

impl SortField {
    /// Every sortable field, in display order.
    pub const ALL: [SortField; 3] = [SortField::Title, SortField::Author, SortField::PublishedYear];

    /// Canonical field name, as used by the catalog's record format.
    pub fn name(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::PublishedYear => "publishedYear",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortField {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "author" => Ok(SortField::Author),
            "publishedYear" | "published_year" | "year" => Ok(SortField::PublishedYear),
            other => Err(SortError::UnknownField(other.to_string())),
        }
    }
}

/// Requested output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[inline]
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// How text values compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Collation {
    /// Plain Unicode code-point order (`str::cmp`).
    #[default]
    CodePoint,
    /// Lowercased comparison, falling back to code-point order on ties so the
    /// order stays total.
    CaseInsensitive,
}

impl Collation {
    fn cmp_text(self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::CodePoint => a.cmp(b),
            Collation::CaseInsensitive => {
                let folded = a
                    .chars()
                    .flat_map(char::to_lowercase)
                    .cmp(b.chars().flat_map(char::to_lowercase));
                folded.then_with(|| a.cmp(b))
            },
        }
    }
}

/// Value of a record's sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

impl FieldValue<'_> {
    fn same_kind(&self, other: &FieldValue<'_>) -> bool {
        matches!(
            (self, other),
            (FieldValue::Text(_), FieldValue::Text(_))
                | (FieldValue::Number(_), FieldValue::Number(_))
        )
    }
}

/// Records that expose named fields for sorting.
///
/// Return `None` for fields the record does not have; sorting by such a
/// field is rejected with [`SortError::MissingField`].
pub trait SortRecord {
    fn field(&self, field: SortField) -> Option<FieldValue<'_>>;
}

impl<T: SortRecord + ?Sized> SortRecord for &T {
    fn field(&self, field: SortField) -> Option<FieldValue<'_>> {
        (**self).field(field)
    }
}

/// Heap sort parameterized by field, direction and text collation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyedHeapSort {
    field: SortField,
    direction: SortDirection,
    collation: Collation,
}

impl KeyedHeapSort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field,
            direction,
            collation: Collation::default(),
        }
    }

    /// Parses `field` by name, e.g. `"publishedYear"`.
    pub fn by_name(field: &str, direction: SortDirection) -> Result<Self, SortError> {
        Ok(Self::new(field.parse()?, direction))
    }

    pub fn with_collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    pub fn field(&self) -> SortField {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn collation(&self) -> Collation {
        self.collation
    }

    /// Returns a sorted copy of `records`; the input slice is not reordered.
    pub fn sort<R>(&self, records: &[R]) -> Result<Vec<R>, SortError>
    where
        R: SortRecord + Clone,
    {
        self.validate(records)?;
        let mut working = records.to_vec();
        self.sort_unchecked(&mut working);
        Ok(working)
    }

    /// Sorts `records` in place.
    ///
    /// On error the slice is left untouched.
    pub fn sort_in_place<R: SortRecord>(&self, records: &mut [R]) -> Result<(), SortError> {
        self.validate(records)?;
        self.sort_unchecked(records);
        Ok(())
    }

    /// Compares two records under this sorter's field, direction and collation.
    ///
    /// Records missing the field, or holding values of different kinds,
    /// compare as equal; [`sort`](Self::sort) rejects such inputs up front.
    pub fn compare<R: SortRecord>(&self, a: &R, b: &R) -> Ordering {
        let ordering = match (a.field(self.field), b.field(self.field)) {
            (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => self.collation.cmp_text(x, y),
            (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => x.cmp(&y),
            _ => Ordering::Equal,
        };
        self.direction.apply(ordering)
    }

    /// Returns `true` if `records` is already ordered under this sorter.
    pub fn is_sorted<R: SortRecord>(&self, records: &[R]) -> bool {
        records
            .windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }

    fn validate<R: SortRecord>(&self, records: &[R]) -> Result<(), SortError> {
        let mut first: Option<FieldValue<'_>> = None;
        for (index, record) in records.iter().enumerate() {
            let value = record
                .field(self.field)
                .ok_or(SortError::MissingField { index })?;
            match &first {
                None => first = Some(value),
                Some(kind) if kind.same_kind(&value) => {},
                Some(_) => return Err(SortError::IncomparableValues { index }),
            }
        }
        Ok(())
    }

    /// Sorts without the validation pass. Records that miss the field or mix
    /// value kinds compare as equal, so the order among them is arbitrary.
    pub(crate) fn sort_unchecked<R: SortRecord>(&self, records: &mut [R]) {
        trace!(
            field = %self.field,
            direction = ?self.direction,
            len = records.len(),
            "heap sorting records"
        );
        heap_sort_by(records, |a, b| self.compare(a, b));
    }
}
