use std::sync::Arc;
use std::time::Duration;
use log::{info, warn};
use tokio::sync::watch;
use crate::common::common::shutdown_waiting;
use crate::node::structs::announce_scheduler::AnnounceScheduler;
use crate::transport::structs::destination_hash::DestinationHash;
use crate::transport::traits::transport::Transport;

impl AnnounceScheduler {
    /// `interval_minutes` of zero disables announcing. The node name, when set, is sent as app data.
    pub fn new(transport: Arc<dyn Transport>, destination: DestinationHash, interval_minutes: u64, node_name: Option<&str>) -> AnnounceScheduler
    {
        Self::with_interval(transport, destination, Duration::from_secs(interval_minutes.saturating_mul(60)), node_name)
    }

    pub fn with_interval(transport: Arc<dyn Transport>, destination: DestinationHash, interval: Duration, node_name: Option<&str>) -> AnnounceScheduler
    {
        AnnounceScheduler {
            transport,
            destination,
            interval,
            app_data: node_name.map(|name| name.as_bytes().to_vec()),
        }
    }

    pub fn is_enabled(&self) -> bool
    {
        !self.interval.is_zero()
    }

    /// Announces once. A failed announce is logged and retried at the next interval.
    pub async fn announce_now(&self) -> bool
    {
        match self.transport.announce(&self.destination, self.app_data.clone()).await {
            Ok(_) => {
                info!("[ANNOUNCE] Announced {}", self.destination);
                true
            }
            Err(error) => {
                warn!("[ANNOUNCE] Announce of {} failed: {error}", self.destination);
                false
            }
        }
    }

    /// Announces right away and then every interval until shutdown.
    pub async fn run(self, shutdown: watch::Receiver<bool>)
    {
        if !self.is_enabled() {
            info!("[ANNOUNCE] Periodic announces disabled");
            return;
        }
        loop {
            self.announce_now().await;
            if shutdown_waiting(self.interval, shutdown.clone()).await {
                info!("[ANNOUNCE] Scheduler stopped");
                return;
            }
        }
    }
}
