//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the node configuration.
//! Two file formats are understood:
//!
//! - **TOML** (any path ending in `.toml`), the native format written by
//!   `--create-config`
//! - **key=value** lines, the format used by existing page node deployments
//!   (`pages-dir=./pages`, `announce-interval=360`, `#` comments)
//!
//! # Configuration Structure
//!
//! - **log_level**: Logging verbosity
//! - **node_config**: Directories, node name, announce and refresh intervals
//! - **executor_config**: Dynamic page timeout and concurrency
//! - **stats_config**: Report interval, live stats file, final save file, history sizes
//!
//! # Priority
//!
//! Command line flags override the config file, which overrides the defaults
//! from [`Configuration::init`](structs::configuration::Configuration::init).
//!
//! # Example
//!
//! ```rust,ignore
//! use rns_page_node::config::structs::configuration::Configuration;
//!
//! let mut config = Configuration::load_file("node.conf")?;
//! config.apply_cli(&cli);
//! config.validate()?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
