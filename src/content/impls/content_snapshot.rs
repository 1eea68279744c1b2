use std::ops::Bound;
use std::sync::Arc;
use crate::content::enums::content_section::ContentSection;
use crate::content::structs::content_snapshot::{ContentSnapshot, ResourceMap};
use crate::content::structs::resource_descriptor::ResourceDescriptor;

impl ContentSnapshot {
    pub fn section(&self, section: ContentSection) -> &ResourceMap {
        match section {
            ContentSection::Pages => &self.pages,
            ContentSection::Files => &self.files,
        }
    }

    pub fn lookup(&self, path: &str) -> Option<Arc<ResourceDescriptor>> {
        let section = ContentSection::of_path(path)?;
        self.section(section).get(path).cloned()
    }

    /// Immediate children of a directory path, sorted by logical path.
    pub fn children(&self, directory: &str) -> Vec<Arc<ResourceDescriptor>> {
        let Some(section) = ContentSection::of_path(directory) else {
            return Vec::new();
        };
        let prefix = format!("{}/", directory.trim_end_matches('/'));
        self.section(section)
            .range::<String, _>((Bound::Excluded(&prefix), Bound::Unbounded))
            .take_while(|(path, _)| path.starts_with(&prefix))
            .filter(|(path, _)| !path[prefix.len()..].contains('/'))
            .map(|(_, descriptor)| descriptor.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
