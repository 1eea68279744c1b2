use std::collections::BTreeMap;
use std::sync::Arc;
use crate::content::structs::resource_descriptor::ResourceDescriptor;

pub type ResourceMap = BTreeMap<String, Arc<ResourceDescriptor>>;

#[derive(Debug, Clone, Default)]
pub struct ContentSnapshot {
    pub pages: Arc<ResourceMap>,
    pub files: Arc<ResourceMap>,
    pub pages_scanned_at: i64,
    pub files_scanned_at: i64,
}
