//! # RNS Page Node
//!
//! A page node for the Reticulum mesh network. It publishes a directory of Micron pages
//! (static or executed on request) and a directory of downloadable files to any peer
//! able to open a link to the node's `nomadnetwork.node` destination.
//!
//! ## Overview
//!
//! Every inbound request delivered by the transport goes through the [`router`], which
//! resolves the path against the [`content`] index, reads static content from disk or
//! hands executable pages to the [`executor`], and records the outcome in the [`stats`]
//! engine. The [`node`] module ties those together with the announce scheduler and the
//! refresh, report and persistence timers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rns_page_node::config::structs::configuration::Configuration;
//! use rns_page_node::node::structs::page_node::PageNode;
//! use rns_page_node::transport::structs::local_transport::LocalTransport;
//!
//! let config = Arc::new(Configuration::init());
//! let (transport, links) = LocalTransport::new(None);
//! let node = PageNode::start(config, Arc::new(transport)).await?;
//! // ... links.request(...).await
//! node.shutdown().await;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, shutdown helpers and the shared error type
//! - [`config`] - Configuration loading (TOML or key=value), CLI overrides, validation
//! - [`content`] - Snapshot-isolated index of pages, files and directories
//! - [`executor`] - Dynamic page execution in isolated child processes
//! - [`node`] - Node lifecycle and announce scheduling
//! - [`router`] - Request normalisation, resolution and response generation
//! - [`stats`] - Concurrent statistics engine with live and final persistence
//! - [`structs`] - CLI argument definitions
//! - [`transport`] - Boundary to the mesh transport, plus an in-process implementation

/// Common utilities and shared functionality.
///
/// Contains logging setup, the shutdown-aware wait helper, timestamp helpers and
/// hex rendering.
pub mod common;

/// Configuration management module.
///
/// Handles loading the node configuration from TOML or legacy key=value files,
/// applying command line overrides and validating the result.
pub mod config;

/// Content index module.
///
/// Scans the pages and files directories into an immutable snapshot that is
/// swapped atomically on refresh, so lookups never observe a partial index.
pub mod content;

/// Dynamic page execution module.
///
/// Runs executable pages as child processes with the request context passed
/// through environment variables, enforcing a hard timeout.
pub mod executor;

/// Node lifecycle module.
///
/// Starts and stops all node components in order and drives the periodic
/// announce, refresh and statistics timers.
pub mod node;

/// Request routing module.
///
/// The single entry point for inbound requests; never returns an error, every
/// failure is turned into a response.
pub mod router;

/// Statistics tracking module.
///
/// Collects connection and request statistics from many concurrent links and
/// exposes consistent snapshots for reporting and persistence.
pub mod stats;

/// CLI argument parsing structures.
pub mod structs;

/// Transport boundary module.
///
/// Defines what the node consumes from the mesh network stack: identity,
/// destination registration, announces and inbound link events.
pub mod transport;
