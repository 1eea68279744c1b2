//! Statistics enumerations.

/// Counters that can be updated.
pub mod stats_event;

/// Page or file request.
pub mod request_kind;

/// Persistence errors.
pub mod stats_error;
