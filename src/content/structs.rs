//! Content index data structures.

/// A single servable resource.
pub mod resource_descriptor;

/// Immutable mapping of logical paths to descriptors.
pub mod content_snapshot;

/// The index holding the currently published snapshot.
pub mod content_index;

/// Counts reported after a refresh.
pub mod refresh_summary;
