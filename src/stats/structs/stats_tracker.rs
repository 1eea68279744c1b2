use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use parking_lot::{Mutex, RwLock};
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stats::structs::stats_maps::StatsMaps;

#[derive(Debug)]
pub struct StatsTracker {
    pub stats: Arc<StatsAtomics>,
    pub(crate) maps: RwLock<StatsMaps>,
    pub(crate) history_size: usize,
    pub(crate) hourly_retention: usize,
    pub(crate) live_file: Option<PathBuf>,
    /// Set by every mutation, cleared by the live writer.
    pub(crate) dirty: AtomicBool,
    /// Serializes file writers so an older snapshot never replaces a newer one.
    pub(crate) persist_lock: Mutex<()>,
}
