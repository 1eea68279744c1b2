use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Unable to scan {root}: {source}")]
    RefreshFailure {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
