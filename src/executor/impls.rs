//! Implementation blocks for the executor.

/// Spawning, waiting and environment construction.
pub mod dynamic_page_executor;

/// Helpers on execution errors.
pub mod execution_error;

/// Process group termination.
pub mod process_group_guard;
