//! Implementation blocks for configuration types.

/// Loading, saving, CLI overrides and validation of `Configuration`.
pub mod configuration;
