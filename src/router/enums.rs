//! Router enumerations.

/// Outcome of a request.
pub mod response_status;

/// How the transport should frame a response body.
pub mod content_kind;
