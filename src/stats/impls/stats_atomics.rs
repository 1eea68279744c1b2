use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Started => &self.started,
            StatsEvent::TotalConnections => &self.total_connections,
            StatsEvent::ActiveConnections => &self.active_connections,
            StatsEvent::TotalRequests => &self.total_requests,
            StatsEvent::PageRequests => &self.page_requests,
            StatsEvent::FileRequests => &self.file_requests,
            StatsEvent::Ok => &self.ok,
            StatsEvent::NotFound => &self.not_found,
            StatsEvent::ExecutionErrors => &self.execution_errors,
            StatsEvent::Timeouts => &self.timeouts,
        }
    }

    pub fn load(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            total_connections: self.total_connections.load(Ordering::SeqCst),
            active_connections: self.active_connections.load(Ordering::SeqCst),
            total_requests: self.total_requests.load(Ordering::SeqCst),
            page_requests: self.page_requests.load(Ordering::SeqCst),
            file_requests: self.file_requests.load(Ordering::SeqCst),
            ok: self.ok.load(Ordering::SeqCst),
            not_found: self.not_found.load(Ordering::SeqCst),
            execution_errors: self.execution_errors.load(Ordering::SeqCst),
            timeouts: self.timeouts.load(Ordering::SeqCst),
        }
    }
}
