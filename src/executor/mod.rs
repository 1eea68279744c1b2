//! Dynamic page execution module.
//!
//! A dynamic page is an executable file under the pages directory whose first
//! line starts with `#!`. Each request for it spawns a fresh child process;
//! the request context is handed over through environment variables and the
//! process's standard output becomes the response body.
//!
//! # Environment contract
//!
//! | Variable          | Content                                   |
//! |-------------------|-------------------------------------------|
//! | `field_<name>`    | one per submitted form field              |
//! | `var_<name>`      | one per link variable                     |
//! | `link_id`         | the connection identifier                 |
//! | `remote_identity` | the peer identity, only when known        |
//! | `PATH`            | inherited from the node                   |
//!
//! Nothing else from the node's environment is passed on. Names that cannot
//! be environment variable names (empty, containing `=` or NUL) and values
//! containing NUL are dropped with a warning.
//!
//! # Isolation and cleanup
//!
//! Every child runs in its own process group. Whatever way an execution ends
//! (normal exit, failure, timeout or the caller going away) the whole group is
//! sent `SIGKILL` and the child is reaped, so no page can leave processes
//! behind. A semaphore bounds how many pages run at once; waiting for a slot
//! does not count against the execution timeout.
//!
//! # Example
//!
//! ```rust,ignore
//! let executor = DynamicPageExecutor::new(Duration::from_secs(30), 16);
//! match executor.execute(&descriptor, &request).await {
//!     Ok(output) => send(output.stdout),
//!     Err(ExecutionError::Timeout { .. }) => send(timeout_page()),
//!     Err(error) => send(error_page(&error)),
//! }
//! ```

/// Execution error enumeration.
pub mod enums;

/// Executor, execution output and process group guard.
pub mod structs;

/// Implementation blocks for execution.
pub mod impls;
