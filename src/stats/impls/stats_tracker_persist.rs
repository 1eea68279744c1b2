use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, info};
use tokio::sync::watch;
use uuid::Uuid;
use crate::common::common::shutdown_waiting;
use crate::stats::enums::stats_error::StatsError;
use crate::stats::structs::stats_tracker::StatsTracker;

impl StatsTracker {
    pub fn live_file(&self) -> Option<&Path>
    {
        self.live_file.as_deref()
    }

    /// Writes the current snapshot to `path` as pretty JSON, replacing the file atomically.
    pub fn save_to_file(&self, path: &Path) -> Result<(), StatsError>
    {
        let _guard = self.persist_lock.lock();
        let data = serde_json::to_vec_pretty(&self.snapshot())?;
        write_atomically(path, &data)
    }

    /// Writes the live file if one is configured. Failures are logged, not returned.
    pub fn flush_live(&self) -> bool
    {
        let Some(path) = self.live_file.as_deref() else {
            return false;
        };
        self.dirty.store(false, std::sync::atomic::Ordering::Release);
        match self.save_to_file(path) {
            Ok(_) => true,
            Err(error) => {
                self.mark_dirty();
                error!("[STATS] Could not write live stats to {}: {error}", path.display());
                false
            }
        }
    }

    /// Rewrites the live file whenever something changed, checking every `interval`,
    /// until shutdown is signalled.
    pub async fn run_live_writer(self: Arc<Self>, interval: Duration, shutdown: watch::Receiver<bool>)
    {
        let Some(path) = self.live_file.clone() else {
            return;
        };
        info!("[STATS] Writing live stats to {} every {:?} when changed", path.display(), interval);
        loop {
            if shutdown_waiting(interval, shutdown.clone()).await {
                debug!("[STATS] Live stats writer stopping");
                return;
            }
            if !self.take_dirty() {
                continue;
            }
            let tracker = self.clone();
            let target = path.clone();
            match tokio::task::spawn_blocking(move || tracker.save_to_file(&target)).await {
                Ok(Ok(_)) => {}
                Ok(Err(error)) => {
                    self.mark_dirty();
                    error!("[STATS] Could not write live stats to {}: {error}", path.display());
                }
                Err(error) => {
                    self.mark_dirty();
                    error!("[STATS] Live stats write task failed: {error}");
                }
            }
        }
    }

    /// Final persistence: the live file (if configured) and the save file (if given).
    pub fn shutdown(&self, save_path: Option<&Path>) -> Result<(), StatsError>
    {
        self.flush_live();
        let Some(path) = save_path else {
            return Ok(());
        };
        match self.save_to_file(path) {
            Ok(_) => {
                info!("[STATS] Saved final stats to {}", path.display());
                Ok(())
            }
            Err(error) => {
                error!("[STATS] Could not save final stats to {}: {error}", path.display());
                Err(error)
            }
        }
    }
}

/// Writes `data` to a uniquely named sibling of `path`, syncs it and renames it over `path`.
pub fn write_atomically(path: &Path, data: &[u8]) -> Result<(), StatsError>
{
    let file_name = path.file_name().ok_or_else(|| StatsError::InvalidPath(path.to_path_buf()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let temp_path = directory.join(format!(".{}.{}.tmp", file_name.to_string_lossy(), Uuid::new_v4()));

    let result = File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(data)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&temp_path, path));
    if let Err(error) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(StatsError::Io(error));
    }
    Ok(())
}
