//! Implementation blocks for the node lifecycle.

/// Startup, background tasks and shutdown.
pub mod page_node;

/// The announce loop.
pub mod announce_scheduler;
