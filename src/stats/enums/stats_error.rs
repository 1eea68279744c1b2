use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("stats file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stats could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("not a file path: {}", .0.display())]
    InvalidPath(PathBuf),
}
