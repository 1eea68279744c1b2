//! Statistics data structures.

/// Atomic counters for thread-safe statistics updates.
pub mod stats_atomics;

/// Plain copy of the counters.
pub mod stats;

/// Maps and history guarded by the tracker's lock.
pub mod stats_maps;

/// A live link.
pub mod connection_record;

/// One entry of the recent request history.
pub mod recent_request;

/// Aggregates for one hour.
pub mod hourly_bucket;

/// What the router reports for each request.
pub mod request_event;

/// Everything the tracker knows at one point in time.
pub mod stats_snapshot;

/// The tracker itself.
pub mod stats_tracker;
