use chrono::{DateTime, Utc};
use crate::stats::structs::hourly_bucket::HourlyBucket;
use crate::stats::structs::stats_maps::StatsMaps;

pub fn hour_key(timestamp: &DateTime<Utc>) -> String
{
    timestamp.format("%Y-%m-%dT%H:00:00Z").to_string()
}

impl StatsMaps {
    /// The bucket for `timestamp`'s hour. Opening a new bucket drops the oldest
    /// ones beyond `retention`; an event older than everything retained gets `None`.
    pub fn bucket(&mut self, timestamp: &DateTime<Utc>, retention: usize) -> Option<&mut HourlyBucket>
    {
        let key = hour_key(timestamp);
        if !self.hourly.contains_key(&key) {
            self.hourly.insert(key.clone(), HourlyBucket::default());
            while self.hourly.len() > retention.max(1) {
                self.hourly.pop_first();
            }
        }
        self.hourly.get_mut(&key)
    }
}
