use std::fmt::Write;
use crate::stats::structs::stats_snapshot::StatsSnapshot;

pub const REPORT_TOP_PATHS: usize = 5;

impl StatsSnapshot {
    /// The `count` most requested paths, most requested first, ties by path.
    pub fn top_paths(&self, count: usize) -> Vec<(&str, u64)>
    {
        let mut paths: Vec<(&str, u64)> = self.path_counts.iter().map(|(path, hits)| (path.as_str(), *hits)).collect();
        paths.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        paths.truncate(count);
        paths
    }

    pub fn format_report(&self) -> String
    {
        let counters = &self.counters;
        let mut report = String::new();
        let _ = writeln!(report, "[STATS] Connections: {} - Active: {}", counters.total_connections, counters.active_connections);
        let _ = writeln!(
            report,
            "[STATS] Requests: {} - Pages: {} - Files: {}",
            counters.total_requests, counters.page_requests, counters.file_requests
        );
        let _ = writeln!(
            report,
            "[STATS] Ok: {} - Not Found: {} - Errors: {} - Timeouts: {}",
            counters.ok, counters.not_found, counters.execution_errors, counters.timeouts
        );
        let top = self.top_paths(REPORT_TOP_PATHS);
        if !top.is_empty() {
            let listed: Vec<String> = top.iter().map(|(path, hits)| format!("{path} ({hits})")).collect();
            let _ = writeln!(report, "[STATS] Top paths: {}", listed.join(" - "));
        }
        report
    }
}
