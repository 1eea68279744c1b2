//! Transport boundary module.
//!
//! The page node does not implement the mesh protocol itself. It consumes a
//! [`Transport`](traits::transport::Transport) that can
//!
//! - load or create the node identity kept in the identity directory,
//! - register the node destination under the `nomadnetwork.node` namespace,
//! - broadcast announces for that destination,
//! - deliver inbound link events and requests, each request carrying a
//!   one-shot channel for its response.
//!
//! [`LocalTransport`](structs::local_transport::LocalTransport) is an
//! in-process implementation: identities and destination hashes are derived
//! the way Reticulum derives them, announces are logged and counted, and a
//! [`LocalLinkHandle`](structs::local_link_handle::LocalLinkHandle) lets the
//! embedding program (or a test) open links and send requests.

/// Transport events and errors.
pub mod enums;

/// Identities, destination hashes and the local transport.
pub mod structs;

/// Implementation blocks for the transport types.
pub mod impls;

/// The `Transport` trait.
pub mod traits;

/// Unit tests for the local transport.
pub mod tests;
