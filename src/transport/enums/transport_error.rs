use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("identity storage failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("identity file {} is malformed ({length} bytes)", path.display())]
    MalformedIdentity { path: PathBuf, length: usize },
    #[error("destination {0} could not be registered")]
    Registration(String),
    #[error("transport is closed")]
    Closed,
}
