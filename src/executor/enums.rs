//! Executor enumerations.

/// Ways a dynamic page execution can fail.
pub mod execution_error;
