//! Configuration enumerations.

/// Errors raised while loading, writing or validating a configuration.
pub mod configuration_error;
