use crate::router::enums::content_kind::ContentKind;
use crate::router::enums::response_status::ResponseStatus;
use crate::router::router::{execution_error_page, not_found_page, timeout_page};
use crate::router::structs::response::Response;

impl Response {
    pub fn page(body: Vec<u8>) -> Response
    {
        Response { status: ResponseStatus::Ok, body, content_kind: ContentKind::Page }
    }

    pub fn file<N: Into<String>>(body: Vec<u8>, name: N) -> Response
    {
        Response { status: ResponseStatus::Ok, body, content_kind: ContentKind::File { name: name.into() } }
    }

    pub fn not_found(path: &str) -> Response
    {
        Response { status: ResponseStatus::NotFound, body: not_found_page(path), content_kind: ContentKind::Page }
    }

    pub fn execution_error(path: &str) -> Response
    {
        Response { status: ResponseStatus::ExecutionError, body: execution_error_page(path), content_kind: ContentKind::Page }
    }

    pub fn timeout(path: &str) -> Response
    {
        Response { status: ResponseStatus::Timeout, body: timeout_page(path), content_kind: ContentKind::Page }
    }

    pub fn is_ok(&self) -> bool
    {
        self.status == ResponseStatus::Ok
    }
}
