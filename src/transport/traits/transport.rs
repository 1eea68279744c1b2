use std::path::Path;
use async_trait::async_trait;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::enums::transport_event::TransportEvent;
use crate::transport::structs::destination_hash::DestinationHash;
use crate::transport::structs::node_identity::NodeIdentity;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn load_or_create_identity(&self, identity_dir: &Path) -> Result<NodeIdentity, TransportError>;

    async fn register_destination(
        &self,
        identity: &NodeIdentity,
        app_name: &str,
        aspects: &[String],
    ) -> Result<DestinationHash, TransportError>;

    async fn announce(&self, destination: &DestinationHash, app_data: Option<Vec<u8>>) -> Result<(), TransportError>;

    /// The next inbound event, `None` once the transport has shut down.
    async fn next_event(&self) -> Option<TransportEvent>;
}
