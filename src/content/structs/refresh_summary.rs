#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub static_pages: usize,
    pub dynamic_pages: usize,
    pub files: usize,
    pub directories: usize,
}
