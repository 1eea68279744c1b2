use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("could not run page process: {0}")]
    Launch(#[source] std::io::Error),
    /// The process exited unsuccessfully. `code` is `None` when it was killed by a signal.
    #[error("page process exited with status {}", code.map(|c| c.to_string()).unwrap_or_else(|| String::from("signal")))]
    Failure {
        code: Option<i32>,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
    #[error("page process did not finish within {timeout:?}")]
    Timeout {
        timeout: Duration,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
}
