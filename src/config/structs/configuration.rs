use serde::{Deserialize, Serialize};
use crate::config::structs::executor_config::ExecutorConfig;
use crate::config::structs::node_config::NodeConfig;
use crate::config::structs::stats_config::StatsConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub node_config: NodeConfig,
    #[serde(default)]
    pub executor_config: ExecutorConfig,
    #[serde(default)]
    pub stats_config: StatsConfig,
}
