use rand::RngExt;
use tokio::sync::oneshot;
use crate::common::common::hexrep;
use crate::router::structs::request::Request;
use crate::router::structs::response::Response;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::enums::transport_event::TransportEvent;
use crate::transport::structs::local_link_handle::LocalLinkHandle;

impl LocalLinkHandle {
    /// Opens a link and returns its connection id.
    pub async fn open_link(&self, remote_identity: Option<String>) -> Result<String, TransportError>
    {
        let link_id: [u8; 16] = rand::rng().random();
        let connection_id = hexrep(&link_id);
        self.sender
            .send(TransportEvent::LinkEstablished { connection_id: connection_id.clone(), remote_identity })
            .await
            .map_err(|_| TransportError::Closed)?;
        Ok(connection_id)
    }

    pub async fn close_link(&self, connection_id: &str) -> Result<(), TransportError>
    {
        self.sender
            .send(TransportEvent::LinkClosed { connection_id: connection_id.to_string() })
            .await
            .map_err(|_| TransportError::Closed)
    }

    /// Sends a request and waits for the node's response.
    pub async fn request(&self, request: Request) -> Result<Response, TransportError>
    {
        let (responder, response) = oneshot::channel();
        self.sender
            .send(TransportEvent::Request { request, responder })
            .await
            .map_err(|_| TransportError::Closed)?;
        response.await.map_err(|_| TransportError::Closed)
    }
}
