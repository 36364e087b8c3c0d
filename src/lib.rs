//! shelfkit: in-memory library catalog primitives.
//!
//! Three structures do the work behind the catalog:
//!
//! - [`PrefixIndex`](ds::PrefixIndex): character trie answering
//!   lexicographically ordered search suggestions.
//! - [`BoundedRecentCache`](policy::BoundedRecentCache): fixed-capacity LRU
//!   map with an ordered key snapshot.
//! - [`KeyedHeapSort`](sort::KeyedHeapSort): in-place heap sort keyed by a
//!   named record field.
//!
//! [`Catalog`](catalog::Catalog) ties them to a list of books and is built
//! with [`CatalogBuilder`](builder::CatalogBuilder).

pub mod builder;
pub mod catalog;
pub mod ds;
pub mod error;
pub mod policy;
pub mod sort;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
