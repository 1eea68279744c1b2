use std::path::PathBuf;
use serde::Serialize;
use crate::content::enums::resource_kind::ResourceKind;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub logical_path: String,
    pub kind: ResourceKind,
    pub location: PathBuf,
    /// Unix timestamp of the last modification seen at scan time.
    pub modified: i64,
    pub size: u64,
}
