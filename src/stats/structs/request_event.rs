use chrono::{DateTime, Utc};
use crate::router::enums::response_status::ResponseStatus;
use crate::stats::enums::request_kind::RequestKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEvent {
    pub path: String,
    /// When `None`, the peer recorded for the connection is used.
    pub peer: Option<String>,
    pub connection_id: Option<String>,
    pub kind: RequestKind,
    pub status: ResponseStatus,
    pub timestamp: DateTime<Utc>,
}
