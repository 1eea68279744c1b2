use log::debug;
use crate::executor::structs::process_group_guard::ProcessGroupGuard;

impl ProcessGroupGuard {
    /// `pid` is the id of a child spawned as leader of its own process group.
    pub fn new(pid: Option<u32>) -> ProcessGroupGuard
    {
        ProcessGroupGuard {
            pgid: pid.and_then(|pid| i32::try_from(pid).ok()).filter(|pid| *pid > 0),
        }
    }

    pub fn pgid(&self) -> Option<i32>
    {
        self.pgid
    }

    /// Sends `SIGKILL` to every process in the group. Only the first call does anything.
    pub fn kill(&mut self)
    {
        if let Some(pgid) = self.pgid.take() {
            kill_process_group(pgid);
        }
    }
}

impl Drop for ProcessGroupGuard {
    fn drop(&mut self)
    {
        self.kill();
    }
}

#[cfg(unix)]
fn kill_process_group(pgid: i32)
{
    // SAFETY: kill(2) has no memory safety requirements; a negative pid addresses the group.
    let result = unsafe { libc::kill(-pgid, libc::SIGKILL) };
    if result != 0 {
        let error = std::io::Error::last_os_error();
        if error.raw_os_error() != Some(libc::ESRCH) {
            debug!("[EXEC] Could not kill process group {pgid}: {error}");
        }
    }
}

#[cfg(not(unix))]
fn kill_process_group(pgid: i32)
{
    debug!("[EXEC] Process groups are not supported on this platform, group {pgid} left to kill_on_drop");
}
