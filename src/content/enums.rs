//! Content index enumerations.

/// What a logical path resolves to.
pub mod resource_kind;

/// The two scanned roots.
pub mod content_section;

/// Errors raised while scanning.
pub mod content_error;
