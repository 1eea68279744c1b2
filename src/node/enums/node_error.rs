use std::path::PathBuf;
use thiserror::Error;
use crate::transport::enums::transport_error::TransportError;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("could not create directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not load or create the node identity: {0}")]
    Identity(#[source] TransportError),
    #[error("could not register the node destination: {0}")]
    Registration(#[source] TransportError),
}
