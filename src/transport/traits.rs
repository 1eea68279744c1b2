//! Transport traits.

/// What the node needs from a mesh transport.
pub mod transport;
