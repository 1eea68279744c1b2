use tokio::sync::mpsc;
use crate::transport::enums::transport_event::TransportEvent;

#[derive(Debug, Clone)]
pub struct LocalLinkHandle {
    pub(crate) sender: mpsc::Sender<TransportEvent>,
}
