use std::ffi::OsString;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

#[derive(Debug)]
pub struct DynamicPageExecutor {
    pub(crate) timeout: Duration,
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) max_concurrent: usize,
    /// The node's own `PATH`, captured once at construction.
    pub(crate) search_path: Option<OsString>,
}
