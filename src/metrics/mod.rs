//! Optional cache counters (feature `metrics`).
//!
//! Recorders only write counters, snapshots only read them; the cache owns
//! its recorder and hands out a [`RecentCacheMetricsSnapshot`] on request.
pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use metrics_impl::RecentCacheMetrics;
pub use snapshot::RecentCacheMetricsSnapshot;
pub use traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
