use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use async_trait::async_trait;
use log::info;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::enums::transport_event::TransportEvent;
use crate::transport::structs::destination_hash::DestinationHash;
use crate::transport::structs::local_link_handle::LocalLinkHandle;
use crate::transport::structs::local_transport::LocalTransport;
use crate::transport::structs::node_identity::NodeIdentity;
use crate::transport::traits::transport::Transport;

const EVENT_QUEUE: usize = 1024;

impl LocalTransport {
    /// The transport plus the handle used to drive links into it. Once every
    /// handle is dropped the transport reports no further events.
    pub fn new(reticulum_config: Option<PathBuf>) -> (LocalTransport, LocalLinkHandle)
    {
        let (sender, receiver) = mpsc::channel(EVENT_QUEUE);
        let transport = LocalTransport {
            reticulum_config,
            events: tokio::sync::Mutex::new(receiver),
            destinations: Mutex::new(HashMap::new()),
            announces: AtomicU64::new(0),
            last_app_data: Mutex::new(None),
        };
        (transport, LocalLinkHandle { sender })
    }

    pub fn announce_count(&self) -> u64
    {
        self.announces.load(Ordering::SeqCst)
    }

    pub fn last_app_data(&self) -> Option<Vec<u8>>
    {
        self.last_app_data.lock().clone()
    }

    pub fn destination_name(&self, destination: &DestinationHash) -> Option<String>
    {
        self.destinations.lock().get(destination).cloned()
    }
}

#[async_trait]
impl Transport for LocalTransport {
    async fn load_or_create_identity(&self, identity_dir: &Path) -> Result<NodeIdentity, TransportError>
    {
        if let Some(config) = &self.reticulum_config {
            info!("[TRANSPORT] Using transport configuration at {}", config.display());
        }
        NodeIdentity::load_or_create(identity_dir).await
    }

    async fn register_destination(&self, identity: &NodeIdentity, app_name: &str, aspects: &[String]) -> Result<DestinationHash, TransportError>
    {
        let name = DestinationHash::full_name(app_name, aspects);
        if app_name.is_empty() || app_name.contains('.') || aspects.iter().any(|aspect| aspect.is_empty() || aspect.contains('.')) {
            return Err(TransportError::Registration(name));
        }
        let destination = DestinationHash::derive(identity, app_name, aspects);
        self.destinations.lock().insert(destination, name.clone());
        info!("[TRANSPORT] Registered {name} destination {destination}");
        Ok(destination)
    }

    async fn announce(&self, destination: &DestinationHash, app_data: Option<Vec<u8>>) -> Result<(), TransportError>
    {
        if !self.destinations.lock().contains_key(destination) {
            return Err(TransportError::Registration(destination.to_string()));
        }
        self.announces.fetch_add(1, Ordering::SeqCst);
        *self.last_app_data.lock() = app_data;
        info!("[TRANSPORT] Announced {destination}");
        Ok(())
    }

    async fn next_event(&self) -> Option<TransportEvent>
    {
        self.events.lock().await.recv().await
    }
}
