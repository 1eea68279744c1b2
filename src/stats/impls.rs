//! Implementation blocks for statistics.

/// Counter access by event.
pub mod stats_atomics;

/// Request classification.
pub mod request_kind;

/// Hour bucket bookkeeping.
pub mod stats_maps;

/// Report rendering.
pub mod stats_snapshot;

/// Recording and snapshots.
pub mod stats_tracker;

/// File persistence and the live writer loop.
pub mod stats_tracker_persist;
