use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StatsConfig {
    /// Seconds between console reports, 0 disables.
    pub interval: u64,
    /// Live stats file, rewritten atomically while running.
    pub file: Option<String>,
    /// Final stats file, written once on shutdown.
    pub save: Option<String>,
    pub history_size: usize,
    pub hourly_retention: usize,
    pub live_flush_interval_ms: u64,
    /// Seconds of inactivity after which a link record is retired, 0 disables.
    pub connection_timeout: u64,
}
