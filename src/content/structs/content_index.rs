use std::path::PathBuf;
use arc_swap::ArcSwap;
use crate::content::structs::content_snapshot::ContentSnapshot;

#[derive(Debug)]
pub struct ContentIndex {
    pub pages_root: PathBuf,
    pub files_root: PathBuf,
    pub(crate) snapshot: ArcSwap<ContentSnapshot>,
}
