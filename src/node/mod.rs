//! Node lifecycle module.
//!
//! [`PageNode::start`](structs::page_node::PageNode) brings a node up in
//! order: directories, identity, destination registration (both fatal when
//! they fail), the initial content scan, and then the background tasks:
//!
//! - the serve loop, dispatching every transport request to its own task
//! - the [`AnnounceScheduler`](structs::announce_scheduler::AnnounceScheduler)
//! - page and file refresh timers
//! - the periodic statistics report
//! - the live statistics writer
//! - the idle connection reaper
//!
//! Each timer only runs when its interval (or path) is configured. All tasks
//! watch one shutdown channel; [`PageNode::shutdown`](structs::page_node::PageNode)
//! signals it, waits a bounded time for the tasks and then persists the final
//! statistics.

/// Node errors.
pub mod enums;

/// The node and its announce scheduler.
pub mod structs;

/// Implementation blocks for the lifecycle.
pub mod impls;

/// Unit tests for the lifecycle.
pub mod tests;
