use std::fmt;
use crate::content::enums::resource_kind::ResourceKind;
use crate::content::structs::content_snapshot::ResourceMap;
use crate::content::structs::refresh_summary::RefreshSummary;

impl RefreshSummary {
    pub fn count(map: &ResourceMap) -> RefreshSummary {
        let mut summary = RefreshSummary::default();
        for descriptor in map.values() {
            match descriptor.kind {
                ResourceKind::StaticPage => summary.static_pages += 1,
                ResourceKind::DynamicPage => summary.dynamic_pages += 1,
                ResourceKind::StaticFile => summary.files += 1,
                ResourceKind::Directory => summary.directories += 1,
            }
        }
        summary
    }

    pub fn merge(self, other: RefreshSummary) -> RefreshSummary {
        RefreshSummary {
            static_pages: self.static_pages + other.static_pages,
            dynamic_pages: self.dynamic_pages + other.dynamic_pages,
            files: self.files + other.files,
            directories: self.directories + other.directories,
        }
    }
}

impl fmt::Display for RefreshSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pages: {} - Dynamic: {} - Files: {} - Directories: {}",
            self.static_pages, self.dynamic_pages, self.files, self.directories
        )
    }
}
