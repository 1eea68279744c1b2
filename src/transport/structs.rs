//! Transport data structures.

/// The node's long-lived identity.
pub mod node_identity;

/// Hash addressing a registered destination.
pub mod destination_hash;

/// In-process transport.
pub mod local_transport;

/// Client side of the in-process transport.
pub mod local_link_handle;
