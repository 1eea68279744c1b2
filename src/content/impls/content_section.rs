use crate::content::enums::content_section::ContentSection;

impl ContentSection {
    pub fn prefix(&self) -> &'static str {
        match self {
            ContentSection::Pages => "/page",
            ContentSection::Files => "/file",
        }
    }

    /// Which section a normalized logical path belongs to, if any.
    pub fn of_path(path: &str) -> Option<ContentSection> {
        [ContentSection::Pages, ContentSection::Files]
            .into_iter()
            .find(|section| {
                let prefix = section.prefix();
                path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
            })
    }
}
