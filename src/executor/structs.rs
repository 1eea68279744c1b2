//! Executor data structures.

/// The executor itself.
pub mod dynamic_page_executor;

/// Captured output of a successful run.
pub mod execution_output;

/// Kills a child's process group when dropped.
pub mod process_group_guard;
