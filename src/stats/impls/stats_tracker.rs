use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use chrono::Utc;
use log::debug;
use parking_lot::{Mutex, RwLock};
use crate::config::structs::stats_config::StatsConfig;
use crate::router::enums::response_status::ResponseStatus;
use crate::stats::enums::request_kind::RequestKind;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::connection_record::ConnectionRecord;
use crate::stats::structs::recent_request::RecentRequest;
use crate::stats::structs::request_event::RequestEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stats::structs::stats_maps::StatsMaps;
use crate::stats::structs::stats_snapshot::StatsSnapshot;
use crate::stats::structs::stats_tracker::StatsTracker;

/// Peer key for requests whose sender did not identify itself.
pub const ANONYMOUS_PEER: &str = "anonymous";

impl StatsTracker {
    pub fn new(config: &StatsConfig) -> StatsTracker
    {
        let mut tracker = Self::with_limits(config.history_size, config.hourly_retention);
        tracker.live_file = config.file.as_ref().map(PathBuf::from);
        tracker
    }

    pub fn with_limits(history_size: usize, hourly_retention: usize) -> StatsTracker
    {
        let tracker = StatsTracker {
            stats: Arc::new(StatsAtomics::default()),
            maps: RwLock::new(StatsMaps::default()),
            history_size: history_size.max(1),
            hourly_retention: hourly_retention.max(1),
            live_file: None,
            dirty: AtomicBool::new(false),
            persist_lock: Mutex::new(()),
        };
        tracker.set_stats(StatsEvent::Started, Utc::now().timestamp());
        tracker
    }

    pub fn get_stats(&self) -> Stats
    {
        self.stats.load()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn record_connection_opened(&self, connection_id: &str, peer: Option<&str>)
    {
        let now = Utc::now();
        {
            let mut maps = self.maps.write();
            if maps.connections.contains_key(connection_id) {
                debug!("[STATS] Connection {connection_id} is already open, ignoring");
                return;
            }
            maps.connections.insert(connection_id.to_string(), ConnectionRecord {
                connection_id: connection_id.to_string(),
                peer: peer.map(str::to_string),
                established: now.timestamp(),
                last_activity: now.timestamp(),
                requests: 0,
            });
            if let Some(bucket) = maps.bucket(&now, self.hourly_retention) {
                bucket.connections += 1;
            }
            self.update_stats(StatsEvent::TotalConnections, 1);
            self.update_stats(StatsEvent::ActiveConnections, 1);
        }
        self.mark_dirty();
    }

    pub fn record_connection_closed(&self, connection_id: &str)
    {
        {
            let mut maps = self.maps.write();
            if maps.connections.remove(connection_id).is_none() {
                debug!("[STATS] Connection {connection_id} is not open, ignoring close");
                return;
            }
            self.update_stats(StatsEvent::ActiveConnections, -1);
        }
        self.mark_dirty();
    }

    pub fn record_request(&self, event: RequestEvent)
    {
        let timestamp = event.timestamp.timestamp();
        {
            let mut maps = self.maps.write();
            let connection = match event.connection_id.as_deref() {
                Some(id) => maps.connections.get_mut(id),
                None => None,
            };
            let peer = match connection {
                Some(record) => {
                    record.requests += 1;
                    record.last_activity = record.last_activity.max(timestamp);
                    event.peer.or_else(|| record.peer.clone())
                }
                None => event.peer,
            };
            let peer = peer.unwrap_or_else(|| ANONYMOUS_PEER.to_string());

            *maps.paths.entry(event.path.clone()).or_insert(0) += 1;
            *maps.peers.entry(peer.clone()).or_insert(0) += 1;
            maps.history.push_back(RecentRequest {
                timestamp,
                path: event.path,
                peer,
                status: event.status,
            });
            while maps.history.len() > self.history_size {
                maps.history.pop_front();
            }
            if let Some(bucket) = maps.bucket(&event.timestamp, self.hourly_retention) {
                bucket.requests += 1;
                match event.kind {
                    RequestKind::Page => bucket.page_requests += 1,
                    RequestKind::File => bucket.file_requests += 1,
                }
                if event.status != ResponseStatus::Ok {
                    bucket.errors += 1;
                }
            }

            self.update_stats(StatsEvent::TotalRequests, 1);
            self.update_stats(match event.kind {
                RequestKind::Page => StatsEvent::PageRequests,
                RequestKind::File => StatsEvent::FileRequests,
            }, 1);
            self.update_stats(match event.status {
                ResponseStatus::Ok => StatsEvent::Ok,
                ResponseStatus::NotFound => StatsEvent::NotFound,
                ResponseStatus::ExecutionError => StatsEvent::ExecutionErrors,
                ResponseStatus::Timeout => StatsEvent::Timeouts,
            }, 1);
        }
        self.mark_dirty();
    }

    /// Retires connections without activity for longer than `max_idle`, returning how many.
    pub fn retire_idle_connections(&self, max_idle: Duration) -> usize
    {
        let cutoff = Utc::now().timestamp() - i64::try_from(max_idle.as_secs()).unwrap_or(i64::MAX);
        let retired = {
            let mut maps = self.maps.write();
            let before = maps.connections.len();
            maps.connections.retain(|_, record| record.last_activity >= cutoff);
            let retired = before - maps.connections.len();
            if retired > 0 {
                self.update_stats(StatsEvent::ActiveConnections, -(retired as i64));
            }
            retired
        };
        if retired > 0 {
            debug!("[STATS] Retired {retired} idle connections");
            self.mark_dirty();
        }
        retired
    }

    pub fn connection(&self, connection_id: &str) -> Option<ConnectionRecord>
    {
        self.maps.read().connections.get(connection_id).cloned()
    }

    pub fn snapshot(&self) -> StatsSnapshot
    {
        let maps = self.maps.read();
        let mut connections: Vec<ConnectionRecord> = maps.connections.values().cloned().collect();
        connections.sort_by(|a, b| a.established.cmp(&b.established).then_with(|| a.connection_id.cmp(&b.connection_id)));
        StatsSnapshot {
            generated_at: Utc::now().timestamp(),
            counters: self.get_stats(),
            path_counts: maps.paths.clone(),
            peer_counts: maps.peers.clone(),
            recent_requests: maps.history.iter().cloned().collect(),
            hourly: maps.hourly.clone(),
            connections,
        }
    }

    pub fn history_size(&self) -> usize
    {
        self.history_size
    }

    pub fn hourly_retention(&self) -> usize
    {
        self.hourly_retention
    }

    pub(crate) fn mark_dirty(&self)
    {
        self.dirty.store(true, Ordering::Release);
    }

    pub(crate) fn take_dirty(&self) -> bool
    {
        self.dirty.swap(false, Ordering::AcqRel)
    }
}

impl StatsTracker {
    pub fn format_report(&self) -> String
    {
        self.snapshot().format_report()
    }
}
