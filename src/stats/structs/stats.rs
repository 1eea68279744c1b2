use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub total_connections: i64,
    pub active_connections: i64,
    pub total_requests: i64,
    pub page_requests: i64,
    pub file_requests: i64,
    pub ok: i64,
    pub not_found: i64,
    pub execution_errors: i64,
    pub timeouts: i64,
}
