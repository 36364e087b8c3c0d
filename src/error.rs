//! Error types for the shelfkit library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//! - [`ConfigError`]: Returned when configuration parameters are invalid
//!   (e.g. zero cache capacity).
//! - [`SortError`]: Returned when a keyed sort is asked to order records by a
//!   field they cannot be compared on.
//! - [`CatalogError`]: Umbrella error for catalog construction and snapshots.
//!
//! ## Example Usage
//!
//! ```
//! use shelfkit::error::ConfigError;
//! use shelfkit::policy::recent::BoundedRecentCache;
//!
//! let cache: Result<BoundedRecentCache<u64, String>, ConfigError> =
//!     BoundedRecentCache::try_new(100);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught at construction, before any use
//! let bad = BoundedRecentCache::<u64, String>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal structure invariants are violated.
///
/// Produced by `check_invariants` methods such as
/// [`BoundedRecentCache::check_invariants`](crate::policy::recent::BoundedRecentCache::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`BoundedRecentCache::try_new`](crate::policy::recent::BoundedRecentCache::try_new)
/// and [`CatalogBuilder::try_build`](crate::builder::CatalogBuilder::try_build).
///
/// # Example
///
/// ```
/// use shelfkit::policy::recent::BoundedRecentCache;
///
/// let err = BoundedRecentCache::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// SortError
// ---------------------------------------------------------------------------

/// Error returned by [`KeyedHeapSort`](crate::sort::KeyedHeapSort).
///
/// Sorting never starts when one of these is returned, so the input keeps its
/// original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The requested field name is not one of the sortable fields.
    UnknownField(String),
    /// The record at `index` does not expose the selected field.
    MissingField { index: usize },
    /// The record at `index` yields a value of a different kind than the
    /// records before it (e.g. text mixed with numbers).
    IncomparableValues { index: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::UnknownField(name) => write!(f, "unknown sort field `{name}`"),
            SortError::MissingField { index } => {
                write!(f, "record {index} has no value for the sort field")
            },
            SortError::IncomparableValues { index } => {
                write!(f, "record {index} has a sort value of a different kind")
            },
        }
    }
}

impl std::error::Error for SortError {}

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

/// Error returned by catalog construction, id assignment and snapshot
/// (de)serialization.
#[derive(Debug)]
pub enum CatalogError {
    /// Invalid builder configuration.
    Config(ConfigError),
    /// Snapshot text could not be produced or parsed.
    Snapshot(serde_json::Error),
    /// The highest book id is `u64::MAX`, so no new id can be assigned.
    IdsExhausted,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Config(err) => write!(f, "invalid catalog configuration: {err}"),
            CatalogError::Snapshot(err) => write!(f, "catalog snapshot error: {err}"),
            CatalogError::IdsExhausted => f.write_str("no book ids left to assign"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Config(err) => Some(err),
            CatalogError::Snapshot(err) => Some(err),
            CatalogError::IdsExhausted => None,
        }
    }
}

impl From<ConfigError> for CatalogError {
    fn from(err: ConfigError) -> Self {
        CatalogError::Config(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Snapshot(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index length mismatch");
        assert_eq!(err.to_string(), "index length mismatch");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_debug_includes_message() {
        let err = ConfigError::new("bad limit");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("bad limit"));
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
        assert_error::<InvariantError>();
        assert_error::<SortError>();
        assert_error::<CatalogError>();
    }

    // -- SortError --------------------------------------------------------

    #[test]
    fn sort_error_display_names_the_problem() {
        assert_eq!(
            SortError::UnknownField("isbn".into()).to_string(),
            "unknown sort field `isbn`"
        );
        assert!(
            SortError::MissingField { index: 3 }
                .to_string()
                .contains("record 3")
        );
        assert!(
            SortError::IncomparableValues { index: 1 }
                .to_string()
                .contains("different kind")
        );
    }

    // -- CatalogError -----------------------------------------------------

    #[test]
    fn catalog_error_wraps_config_error() {
        let err: CatalogError = ConfigError::new("capacity must be > 0").into();
        assert!(matches!(err, CatalogError::Config(_)));
        assert!(err.to_string().contains("capacity must be > 0"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn catalog_error_wraps_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Snapshot(_)));
        assert!(err.to_string().starts_with("catalog snapshot error"));
    }
}
