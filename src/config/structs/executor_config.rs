use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Seconds a dynamic page may run before it is killed.
    pub timeout: u64,
    pub max_concurrent: usize,
}
