use std::sync::Arc;
use std::time::Duration;
use crate::transport::structs::destination_hash::DestinationHash;
use crate::transport::traits::transport::Transport;

pub struct AnnounceScheduler {
    pub transport: Arc<dyn Transport>,
    pub destination: DestinationHash,
    /// Zero disables announcing.
    pub interval: Duration,
    pub app_data: Option<Vec<u8>>,
}
