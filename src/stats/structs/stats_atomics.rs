use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub total_connections: AtomicI64,
    pub active_connections: AtomicI64,
    pub total_requests: AtomicI64,
    pub page_requests: AtomicI64,
    pub file_requests: AtomicI64,
    pub ok: AtomicI64,
    pub not_found: AtomicI64,
    pub execution_errors: AtomicI64,
    pub timeouts: AtomicI64,
}
