//! Implementation blocks for the transport types.

/// Identity generation, storage and hashing.
pub mod node_identity;

/// Destination hash derivation and display.
pub mod destination_hash;

/// `Transport` for the in-process transport.
pub mod local_transport;

/// Opening links and sending requests in-process.
pub mod local_link_handle;
