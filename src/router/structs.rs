//! Router data structures.

/// An inbound request as handed over by the transport.
pub mod request;

/// The reply returned to the transport.
pub mod response;

/// The request router.
pub mod request_router;
