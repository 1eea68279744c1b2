//! Implementation blocks for the content index.

/// Display names for resource kinds.
pub mod resource_kind;

/// Path prefixes of the two sections.
pub mod content_section;

/// Lookups and directory listings on a snapshot.
pub mod content_snapshot;

/// Scanning and snapshot publication.
pub mod content_index;

/// Summary counting and display.
pub mod refresh_summary;
