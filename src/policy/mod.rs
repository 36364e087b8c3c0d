//! Eviction policies.
pub mod recent;

#[cfg(feature = "concurrency")]
pub use recent::ConcurrentRecentCache;
pub use recent::BoundedRecentCache;
