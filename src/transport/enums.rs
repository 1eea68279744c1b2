//! Transport enumerations.

/// Inbound link and request events.
pub mod transport_event;

/// Transport failures.
pub mod transport_error;
