use std::fmt;
use crate::content::enums::content_section::ContentSection;
use crate::stats::enums::request_kind::RequestKind;

impl RequestKind {
    /// Requests under `/file` are file requests, everything else counts as a page request.
    pub fn of_path(path: &str) -> RequestKind {
        match ContentSection::of_path(path) {
            Some(ContentSection::Files) => RequestKind::File,
            _ => RequestKind::Page,
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Page => f.write_str("page"),
            RequestKind::File => f.write_str("file"),
        }
    }
}
