use crate::executor::enums::execution_error::ExecutionError;

impl ExecutionError {
    /// Whatever the process wrote to stdout before it failed.
    pub fn stdout(&self) -> &[u8]
    {
        match self {
            ExecutionError::Launch(_) => &[],
            ExecutionError::Failure { stdout, .. } | ExecutionError::Timeout { stdout, .. } => stdout,
        }
    }

    pub fn stderr(&self) -> &[u8]
    {
        match self {
            ExecutionError::Launch(_) => &[],
            ExecutionError::Failure { stderr, .. } | ExecutionError::Timeout { stderr, .. } => stderr,
        }
    }

    pub fn is_timeout(&self) -> bool
    {
        matches!(self, ExecutionError::Timeout { .. })
    }
}
