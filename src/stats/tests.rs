#[cfg(test)]
mod stats_tests {
    use chrono::{TimeZone, Utc};
    use crate::router::enums::response_status::ResponseStatus;
    use crate::stats::enums::request_kind::RequestKind;
    use crate::stats::structs::request_event::RequestEvent;

    fn event(path: &str, peer: Option<&str>, connection: Option<&str>, status: ResponseStatus) -> RequestEvent {
        RequestEvent {
            path: path.to_string(),
            peer: peer.map(str::to_string),
            connection_id: connection.map(str::to_string),
            kind: RequestKind::of_path(path),
            status,
            timestamp: Utc::now(),
        }
    }

    mod counter_tests {
        use crate::stats::enums::stats_event::StatsEvent;
        use crate::stats::structs::stats_tracker::StatsTracker;

        #[test]
        fn test_update_and_set_stats() {
            let tracker = StatsTracker::with_limits(10, 10);
            tracker.update_stats(StatsEvent::TotalRequests, 5);
            tracker.update_stats(StatsEvent::TotalRequests, -2);
            tracker.set_stats(StatsEvent::Timeouts, 7);
            let stats = tracker.get_stats();
            assert_eq!(stats.total_requests, 3);
            assert_eq!(stats.timeouts, 7);
            assert!(stats.started > 0);
        }
    }

    mod connection_tests {
        use std::time::Duration;
        use crate::router::enums::response_status::ResponseStatus;
        use crate::stats::structs::stats_tracker::StatsTracker;
        use super::event;

        #[test]
        fn test_open_and_close() {
            let tracker = StatsTracker::with_limits(10, 10);
            tracker.record_connection_opened("a", Some("peer-a"));
            tracker.record_connection_opened("b", None);
            assert_eq!(tracker.get_stats().active_connections, 2);
            tracker.record_connection_closed("a");
            let stats = tracker.get_stats();
            assert_eq!(stats.total_connections, 2);
            assert_eq!(stats.active_connections, 1);
            assert!(tracker.connection("a").is_none());
        }

        #[test]
        fn test_duplicate_open_and_unknown_close_are_ignored() {
            let tracker = StatsTracker::with_limits(10, 10);
            tracker.record_connection_opened("a", None);
            tracker.record_connection_opened("a", Some("other"));
            tracker.record_connection_closed("missing");
            let stats = tracker.get_stats();
            assert_eq!(stats.total_connections, 1);
            assert_eq!(stats.active_connections, 1);
            assert!(tracker.connection("a").unwrap().peer.is_none());
        }

        #[test]
        fn test_requests_update_connection_record() {
            let tracker = StatsTracker::with_limits(10, 10);
            tracker.record_connection_opened("a", Some("peer-a"));
            tracker.record_request(event("/page/index.mu", None, Some("a"), ResponseStatus::Ok));
            tracker.record_request(event("/page/index.mu", None, Some("a"), ResponseStatus::Ok));
            assert_eq!(tracker.connection("a").unwrap().requests, 2);
            assert_eq!(tracker.snapshot().peer_counts.get("peer-a"), Some(&2));
        }

        #[test]
        fn test_retire_idle_connections() {
            let tracker = StatsTracker::with_limits(10, 10);
            tracker.record_connection_opened("idle", None);
            tracker.record_connection_opened("busy", None);
            tracker.maps.write().connections.get_mut("idle").unwrap().last_activity -= 600;
            assert_eq!(tracker.retire_idle_connections(Duration::from_secs(300)), 1);
            assert!(tracker.connection("idle").is_none());
            assert!(tracker.connection("busy").is_some());
            assert_eq!(tracker.get_stats().active_connections, 1);
            assert_eq!(tracker.get_stats().total_connections, 2);
        }
    }

    mod request_tests {
        use chrono::{TimeZone, Utc};
        use crate::router::enums::response_status::ResponseStatus;
        use crate::stats::impls::stats_tracker::ANONYMOUS_PEER;
        use crate::stats::structs::stats_tracker::StatsTracker;
        use super::event;

        #[test]
        fn test_outcomes_and_kinds_are_counted() {
            let tracker = StatsTracker::with_limits(10, 10);
            tracker.record_request(event("/page/index.mu", Some("p"), None, ResponseStatus::Ok));
            tracker.record_request(event("/file/a.bin", Some("p"), None, ResponseStatus::Ok));
            tracker.record_request(event("/page/missing.mu", None, None, ResponseStatus::NotFound));
            tracker.record_request(event("/page/broken.mu", None, None, ResponseStatus::ExecutionError));
            tracker.record_request(event("/page/slow.mu", None, None, ResponseStatus::Timeout));

            let snapshot = tracker.snapshot();
            let counters = snapshot.counters;
            assert_eq!(counters.total_requests, 5);
            assert_eq!(counters.page_requests, 4);
            assert_eq!(counters.file_requests, 1);
            assert_eq!(counters.ok, 2);
            assert_eq!(counters.not_found, 1);
            assert_eq!(counters.execution_errors, 1);
            assert_eq!(counters.timeouts, 1);
            assert_eq!(snapshot.peer_counts.get("p"), Some(&2));
            assert_eq!(snapshot.peer_counts.get(ANONYMOUS_PEER), Some(&3));
            assert_eq!(snapshot.path_counts.values().sum::<u64>(), 5);
        }

        #[test]
        fn test_history_is_bounded() {
            let tracker = StatsTracker::with_limits(3, 10);
            for index in 0..5 {
                tracker.record_request(event(&format!("/page/{index}.mu"), None, None, ResponseStatus::Ok));
            }
            let snapshot = tracker.snapshot();
            let paths: Vec<&str> = snapshot.recent_requests.iter().map(|r| r.path.as_str()).collect();
            assert_eq!(paths, vec!["/page/2.mu", "/page/3.mu", "/page/4.mu"]);
        }

        #[test]
        fn test_hourly_buckets_rotate() {
            let tracker = StatsTracker::with_limits(10, 2);
            for hour in [8, 9, 10] {
                let mut request = event("/page/index.mu", None, None, ResponseStatus::Ok);
                request.timestamp = Utc.with_ymd_and_hms(2024, 5, 1, hour, 30, 0).unwrap();
                tracker.record_request(request);
            }
            let mut straggler = event("/page/index.mu", None, None, ResponseStatus::NotFound);
            straggler.timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 7, 0, 0).unwrap();
            tracker.record_request(straggler);

            let snapshot = tracker.snapshot();
            let keys: Vec<&str> = snapshot.hourly.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["2024-05-01T09:00:00Z", "2024-05-01T10:00:00Z"]);
            assert_eq!(snapshot.hourly["2024-05-01T10:00:00Z"].requests, 1);
            assert_eq!(snapshot.counters.total_requests, 4);
        }
    }

    mod persistence_tests {
        use std::fs;
        use crate::router::enums::response_status::ResponseStatus;
        use crate::stats::structs::stats_snapshot::StatsSnapshot;
        use crate::stats::structs::stats_tracker::StatsTracker;
        use super::event;

        #[test]
        fn test_save_to_file_writes_complete_document() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("stats.json");
            let tracker = StatsTracker::with_limits(10, 10);
            tracker.record_connection_opened("a", Some("peer"));
            tracker.record_request(event("/page/index.mu", None, Some("a"), ResponseStatus::Ok));
            tracker.save_to_file(&path).unwrap();

            let loaded: StatsSnapshot = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
            assert_eq!(loaded.counters.total_requests, 1);
            assert_eq!(loaded.connections.len(), 1);
            assert_eq!(loaded.path_counts.get("/page/index.mu"), Some(&1));

            let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
            assert_eq!(value["total_requests"], 1);
            assert_eq!(value["active_connections"], 1);

            let leftovers = fs::read_dir(dir.path()).unwrap().count();
            assert_eq!(leftovers, 1);
        }

        #[test]
        fn test_save_to_missing_directory_fails_cleanly() {
            let dir = tempfile::tempdir().unwrap();
            let tracker = StatsTracker::with_limits(10, 10);
            assert!(tracker.save_to_file(&dir.path().join("missing/stats.json")).is_err());
        }

        #[test]
        fn test_flush_live_clears_dirty_flag() {
            let dir = tempfile::tempdir().unwrap();
            let mut tracker = StatsTracker::with_limits(10, 10);
            tracker.live_file = Some(dir.path().join("live.json"));
            tracker.record_connection_opened("a", None);
            assert!(tracker.flush_live());
            assert!(!tracker.take_dirty());
            assert!(dir.path().join("live.json").exists());
        }

        #[test]
        fn test_shutdown_writes_save_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("final.json");
            let tracker = StatsTracker::with_limits(10, 10);
            tracker.record_request(event("/file/x", None, None, ResponseStatus::NotFound));
            tracker.shutdown(Some(&path)).unwrap();
            let loaded: StatsSnapshot = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
            assert_eq!(loaded.counters.not_found, 1);
        }
    }

    mod report_tests {
        use crate::router::enums::response_status::ResponseStatus;
        use crate::stats::structs::stats_tracker::StatsTracker;
        use super::event;

        #[test]
        fn test_report_lists_top_paths() {
            let tracker = StatsTracker::with_limits(10, 10);
            for _ in 0..3 {
                tracker.record_request(event("/page/popular.mu", None, None, ResponseStatus::Ok));
            }
            tracker.record_request(event("/page/rare.mu", None, None, ResponseStatus::Ok));
            let snapshot = tracker.snapshot();
            assert_eq!(snapshot.top_paths(1), vec![("/page/popular.mu", 3)]);
            let report = tracker.format_report();
            assert!(report.contains("[STATS] Requests: 4 - Pages: 4 - Files: 0"));
            assert!(report.contains("/page/popular.mu (3) - /page/rare.mu (1)"));
        }
    }

    #[test]
    fn test_hour_key_format() {
        let timestamp = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(crate::stats::impls::stats_maps::hour_key(&timestamp), "2024-12-31T23:00:00Z");
    }
}
