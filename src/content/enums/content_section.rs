#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSection {
    Pages,
    Files,
}
