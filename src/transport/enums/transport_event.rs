use tokio::sync::oneshot;
use crate::router::structs::request::Request;
use crate::router::structs::response::Response;

#[derive(Debug)]
pub enum TransportEvent {
    LinkEstablished {
        connection_id: String,
        remote_identity: Option<String>,
    },
    LinkClosed {
        connection_id: String,
    },
    Request {
        request: Request,
        /// Dropped without a reply if the link went away meanwhile.
        responder: oneshot::Sender<Response>,
    },
}
