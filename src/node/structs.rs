//! Node data structures.

/// A running page node.
pub mod page_node;

/// Periodic announces.
pub mod announce_scheduler;
