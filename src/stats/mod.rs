//! Statistics tracking module.
//!
//! Collects connection and request statistics from every active link and
//! exposes them as consistent snapshots for the periodic report, the live
//! statistics file and the final save on shutdown.
//!
//! # Statistics Categories
//!
//! ## Counters
//! - Total and active connections
//! - Total, page and file requests
//! - Outcomes: ok, not found, execution errors, timeouts
//!
//! ## Breakdowns
//! - Requests per path and per peer (`anonymous` when the peer is unknown)
//! - A bounded history of the most recent requests
//! - Hourly buckets keyed `YYYY-MM-DDTHH:00:00Z`
//! - Live connection records
//!
//! # Thread Safety
//!
//! Scalar counters are atomics. The breakdown maps sit behind a single
//! `parking_lot::RwLock`; every mutation takes the write lock just for its
//! map updates and bumps the counters while holding it, and `snapshot()`
//! reads everything under the read lock. A snapshot is therefore internally
//! consistent: the per-path counts always sum to the request total.
//!
//! # Persistence
//!
//! Files are written to a uniquely named temporary file next to the target,
//! synced and renamed over it, so readers only ever see complete documents.
//! Live writes are coalesced through a dirty flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use rns_page_node::stats::enums::stats_event::StatsEvent;
//!
//! tracker.record_connection_opened("link-1", Some("peer"));
//! tracker.update_stats(StatsEvent::TotalRequests, 1);
//! let stats = tracker.get_stats();
//! let snapshot = tracker.snapshot();
//! ```

/// Statistics enumerations.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures.
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
