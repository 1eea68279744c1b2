use serde::{Deserialize, Serialize};

/// Counters of [`StatsAtomics`](crate::stats::structs::stats_atomics::StatsAtomics),
/// used with `StatsTracker::update_stats()` and `StatsTracker::set_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Started,
    TotalConnections,
    ActiveConnections,
    TotalRequests,
    PageRequests,
    FileRequests,
    Ok,
    NotFound,
    ExecutionErrors,
    Timeouts,
}
