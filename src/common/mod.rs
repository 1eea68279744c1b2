//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the node.
//!
//! # Utilities
//!
//! - Logging setup (`fern` with coloured levels)
//! - Shutdown-aware sleeping for background loops
//! - Timestamp utilities
//! - Hex rendering of identity and destination hashes
//!
//! # Example
//!
//! ```rust,ignore
//! use rns_page_node::common::common::{setup_logging, shutdown_waiting};
//!
//! setup_logging(&config);
//!
//! // Sleep for the interval, or return early when shutdown is signalled
//! if shutdown_waiting(Duration::from_secs(60), shutdown_rx.clone()).await {
//!     return;
//! }
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
