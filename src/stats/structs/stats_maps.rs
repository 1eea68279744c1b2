use std::collections::{BTreeMap, HashMap, VecDeque};
use crate::stats::structs::connection_record::ConnectionRecord;
use crate::stats::structs::hourly_bucket::HourlyBucket;
use crate::stats::structs::recent_request::RecentRequest;

#[derive(Debug, Default)]
pub struct StatsMaps {
    pub connections: HashMap<String, ConnectionRecord>,
    pub paths: BTreeMap<String, u64>,
    pub peers: BTreeMap<String, u64>,
    pub history: VecDeque<RecentRequest>,
    /// Keyed by the hour formatted as `YYYY-MM-DDTHH:00:00Z`, which sorts chronologically.
    pub hourly: BTreeMap<String, HourlyBucket>,
}
