//! Node enumerations.

/// Startup failures.
pub mod node_error;
