//! Implementation blocks for routing.

/// Request construction and request data parsing.
pub mod request;

/// Response constructors.
pub mod response;

/// Status helpers.
pub mod response_status;

/// Resolution and dispatch.
pub mod request_router;
