use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::stats::structs::connection_record::ConnectionRecord;
use crate::stats::structs::hourly_bucket::HourlyBucket;
use crate::stats::structs::recent_request::RecentRequest;
use crate::stats::structs::stats::Stats;

/// The document written to the live and final statistics files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub generated_at: i64,
    #[serde(flatten)]
    pub counters: Stats,
    pub path_counts: BTreeMap<String, u64>,
    pub peer_counts: BTreeMap<String, u64>,
    /// Oldest first.
    pub recent_requests: Vec<RecentRequest>,
    pub hourly: BTreeMap<String, HourlyBucket>,
    pub connections: Vec<ConnectionRecord>,
}
