pub use crate::builder::CatalogBuilder;
pub use crate::catalog::{Book, BookId, BookStatus, Catalog, NewBook};
pub use crate::ds::{IntrusiveList, PrefixIndex, SlotArena, SlotId};
pub use crate::error::{CatalogError, ConfigError, InvariantError, SortError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::RecentCacheMetricsSnapshot;
#[cfg(feature = "concurrency")]
pub use crate::policy::ConcurrentRecentCache;
pub use crate::policy::BoundedRecentCache;
pub use crate::sort::{
    Collation, FieldValue, KeyedHeapSort, SortDirection, SortField, SortRecord,
};
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};
