//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Node settings (directories, name, announce and refresh intervals).
pub mod node_config;

/// Dynamic page execution settings.
pub mod executor_config;

/// Statistics reporting and persistence settings.
pub mod stats_config;
