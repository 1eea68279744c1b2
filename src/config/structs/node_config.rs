use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct NodeConfig {
    pub name: Option<String>,
    pub pages_dir: String,
    pub files_dir: String,
    pub identity_dir: String,
    pub reticulum_config: Option<String>,
    /// Minutes between announces, 0 disables.
    pub announce_interval: u64,
    /// Seconds between page rescans, 0 disables.
    pub page_refresh_interval: u64,
    /// Seconds between file rescans, 0 disables.
    pub file_refresh_interval: u64,
}
