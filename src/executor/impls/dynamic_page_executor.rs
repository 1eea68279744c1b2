use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{debug, warn};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use crate::config::structs::executor_config::ExecutorConfig;
use crate::content::structs::resource_descriptor::ResourceDescriptor;
use crate::executor::enums::execution_error::ExecutionError;
use crate::executor::structs::dynamic_page_executor::DynamicPageExecutor;
use crate::executor::structs::execution_output::ExecutionOutput;
use crate::executor::structs::process_group_guard::ProcessGroupGuard;
use crate::router::structs::request::Request;

pub const FIELD_PREFIX: &str = "field_";
pub const VAR_PREFIX: &str = "var_";
pub const LINK_ID_VARIABLE: &str = "link_id";
pub const REMOTE_IDENTITY_VARIABLE: &str = "remote_identity";

const SPAWN_ATTEMPTS: u32 = 5;
const SPAWN_BACKOFF: Duration = Duration::from_millis(20);
/// How long to keep draining pipes after the process group was killed.
const OUTPUT_GRACE: Duration = Duration::from_millis(500);

impl DynamicPageExecutor {
    pub fn new(timeout: Duration, max_concurrent: usize) -> DynamicPageExecutor
    {
        let max_concurrent = max_concurrent.max(1);
        DynamicPageExecutor {
            timeout,
            permits: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
            search_path: std::env::var_os("PATH"),
        }
    }

    pub fn from_config(config: &ExecutorConfig) -> DynamicPageExecutor
    {
        Self::new(Duration::from_secs(config.timeout), config.max_concurrent)
    }

    pub fn timeout(&self) -> Duration
    {
        self.timeout
    }

    pub fn max_concurrent(&self) -> usize
    {
        self.max_concurrent
    }

    /// Number of executions currently holding a slot.
    pub fn running(&self) -> usize
    {
        self.max_concurrent - self.permits.available_permits()
    }

    /// The variables handed to a page for this request, `PATH` excluded.
    /// Entries that cannot be represented in an environment are dropped.
    pub fn build_environment(request: &Request) -> Vec<(String, String)>
    {
        let mut environment = Vec::with_capacity(request.form_fields.len() + request.link_variables.len() + 2);
        let prefixed = request.form_fields.iter().map(|(name, value)| (FIELD_PREFIX, name, value))
            .chain(request.link_variables.iter().map(|(name, value)| (VAR_PREFIX, name, value)));
        for (prefix, name, value) in prefixed {
            if !is_valid_variable_name(name) {
                warn!("[EXEC] Dropping request variable with unusable name {name:?}");
                continue;
            }
            if !is_valid_variable_value(value) {
                warn!("[EXEC] Dropping request variable {prefix}{name}: value contains NUL");
                continue;
            }
            environment.push((format!("{prefix}{name}"), value.clone()));
        }

        if is_valid_variable_value(&request.connection_id) {
            environment.push((LINK_ID_VARIABLE.to_string(), request.connection_id.clone()));
        } else {
            warn!("[EXEC] Dropping {LINK_ID_VARIABLE}: value contains NUL");
        }
        if let Some(identity) = &request.remote_identity {
            if is_valid_variable_value(identity) {
                environment.push((REMOTE_IDENTITY_VARIABLE.to_string(), identity.clone()));
            } else {
                warn!("[EXEC] Dropping {REMOTE_IDENTITY_VARIABLE}: value contains NUL");
            }
        }
        environment
    }

    /// Runs the page for one request and waits for it, at most `timeout` once a slot is free.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %descriptor.logical_path))]
    pub async fn execute(&self, descriptor: &ResourceDescriptor, request: &Request) -> Result<ExecutionOutput, ExecutionError>
    {
        let _permit = self.permits.acquire().await
            .map_err(|_| ExecutionError::Launch(std::io::Error::other("executor is closed")))?;

        let started = Instant::now();
        let mut child = self.spawn(&descriptor.location, request).await.map_err(|error| {
            warn!("[EXEC] Could not start {}: {error}", descriptor.logical_path);
            ExecutionError::Launch(error)
        })?;
        let mut group = ProcessGroupGuard::new(child.id());

        let stdout_task = tokio::spawn(read_stream(child.stdout.take()));
        let stderr_task = tokio::spawn(read_stream(child.stderr.take()));

        // Only the page itself is timed. Background children holding its pipes
        // open are killed with the group once it exits.
        match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(status) => {
                let duration = started.elapsed();
                group.kill();
                let stdout = drain_output(stdout_task).await;
                let stderr = drain_output(stderr_task).await;
                let status = status.map_err(ExecutionError::Launch)?;
                self.finish(descriptor, status, stdout, stderr, duration)
            }
            Err(_) => {
                group.kill();
                if let Err(error) = child.kill().await {
                    debug!("[EXEC] Reaping timed out page {} failed: {error}", descriptor.logical_path);
                }
                let stdout = drain_output(stdout_task).await;
                let stderr = drain_output(stderr_task).await;
                warn!("[EXEC] {} killed after exceeding {:?}", descriptor.logical_path, self.timeout);
                log_stderr(descriptor, &stderr, true);
                Err(ExecutionError::Timeout { timeout: self.timeout, stdout, stderr })
            }
        }
    }

    fn finish(&self, descriptor: &ResourceDescriptor, status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>, duration: Duration) -> Result<ExecutionOutput, ExecutionError>
    {
        if status.success() {
            debug!("[EXEC] {} finished in {:?} ({} bytes)", descriptor.logical_path, duration, stdout.len());
            log_stderr(descriptor, &stderr, false);
            return Ok(ExecutionOutput { stdout, stderr, duration });
        }
        warn!("[EXEC] {} exited with {status}", descriptor.logical_path);
        log_stderr(descriptor, &stderr, true);
        Err(ExecutionError::Failure { code: status.code(), stdout, stderr })
    }

    fn command(&self, location: &Path, request: &Request) -> Command
    {
        let mut command = Command::new(location);
        command
            .env_clear()
            .envs(Self::build_environment(request))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(search_path) = &self.search_path {
            command.env("PATH", search_path);
        }
        #[cfg(unix)]
        command.process_group(0);
        command
    }

    /// Spawns the page, retrying while the file is still busy for writing elsewhere.
    async fn spawn(&self, location: &Path, request: &Request) -> std::io::Result<Child>
    {
        let mut attempt = 1;
        loop {
            match self.command(location, request).spawn() {
                Ok(child) => return Ok(child),
                Err(error) if is_text_busy(&error) && attempt < SPAWN_ATTEMPTS => {
                    debug!("[EXEC] {} busy, retrying (attempt {attempt})", location.display());
                    tokio::time::sleep(SPAWN_BACKOFF * attempt).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

pub fn is_valid_variable_name(name: &str) -> bool
{
    !name.is_empty() && !name.contains(['=', '\0'])
}

pub fn is_valid_variable_value(value: &str) -> bool
{
    !value.contains('\0')
}

#[cfg(unix)]
fn is_text_busy(error: &std::io::Error) -> bool
{
    error.raw_os_error() == Some(libc::ETXTBSY)
}

#[cfg(not(unix))]
fn is_text_busy(_error: &std::io::Error) -> bool
{
    false
}

async fn read_stream<R: AsyncRead + Unpin>(stream: Option<R>) -> Vec<u8>
{
    let mut buffer = Vec::new();
    if let Some(mut stream) = stream
        && let Err(error) = stream.read_to_end(&mut buffer).await {
        debug!("[EXEC] Reading page output failed after {} bytes: {error}", buffer.len());
    }
    buffer
}

/// Collects what the page wrote once its group is gone, giving up after a short grace period.
async fn drain_output(mut task: JoinHandle<Vec<u8>>) -> Vec<u8>
{
    match tokio::time::timeout(OUTPUT_GRACE, &mut task).await {
        Ok(result) => result.unwrap_or_default(),
        Err(_) => {
            task.abort();
            Vec::new()
        }
    }
}

fn log_stderr(descriptor: &ResourceDescriptor, stderr: &[u8], failed: bool)
{
    if stderr.is_empty() {
        return;
    }
    let text = String::from_utf8_lossy(stderr);
    if failed {
        warn!("[EXEC] {} stderr: {}", descriptor.logical_path, text.trim_end());
    } else {
        debug!("[EXEC] {} stderr: {}", descriptor.logical_path, text.trim_end());
    }
}
