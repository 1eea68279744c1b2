use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use crate::transport::enums::transport_event::TransportEvent;
use crate::transport::structs::destination_hash::DestinationHash;

/// In-process stand-in for a Reticulum transport. Links and requests are
/// injected through a [`LocalLinkHandle`](crate::transport::structs::local_link_handle::LocalLinkHandle)
/// instead of arriving over a network interface.
#[derive(Debug)]
pub struct LocalTransport {
    pub(crate) reticulum_config: Option<PathBuf>,
    pub(crate) events: tokio::sync::Mutex<mpsc::Receiver<TransportEvent>>,
    pub(crate) destinations: Mutex<HashMap<DestinationHash, String>>,
    pub(crate) announces: AtomicU64,
    pub(crate) last_app_data: Mutex<Option<Vec<u8>>>,
}
