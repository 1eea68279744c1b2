//! Request routing module.
//!
//! [`RequestRouter::handle`](structs::request_router::RequestRouter) is the
//! only entry point the transport uses. It normalises the requested path,
//! resolves it against the current content snapshot and produces a
//! [`Response`](structs::response::Response) for every outcome:
//!
//! | Resource      | Response                                       |
//! |---------------|------------------------------------------------|
//! | Directory     | generated Micron listing of immediate children |
//! | Static page   | the file bytes, unchanged                      |
//! | Static file   | the file bytes, tagged with the file name      |
//! | Dynamic page  | the standard output of the executed page       |
//! | anything else | a `>Not Found` page                            |
//!
//! Failures never escape `handle`. Each request is processed in its own task,
//! so a transport that stops waiting (for example because the link closed)
//! does not interrupt a running page; its response is simply dropped. The
//! outcome is recorded in the statistics engine before a response is
//! returned.

/// Response status and content kind.
pub mod enums;

/// Requests, responses and the router.
pub mod structs;

/// Implementation blocks for routing.
pub mod impls;

/// Path normalisation and Micron page rendering.
#[allow(clippy::module_inception)]
pub mod router;
