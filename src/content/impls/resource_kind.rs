use std::fmt;
use crate::content::enums::resource_kind::ResourceKind;

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::StaticFile => "file",
            ResourceKind::StaticPage => "page",
            ResourceKind::DynamicPage => "dynamic page",
            ResourceKind::Directory => "directory",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
