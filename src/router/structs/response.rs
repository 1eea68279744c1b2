use crate::router::enums::content_kind::ContentKind;
use crate::router::enums::response_status::ResponseStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: ResponseStatus,
    pub body: Vec<u8>,
    pub content_kind: ContentKind,
}
