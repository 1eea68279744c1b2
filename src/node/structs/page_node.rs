use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::config::structs::configuration::Configuration;
use crate::content::structs::content_index::ContentIndex;
use crate::executor::structs::dynamic_page_executor::DynamicPageExecutor;
use crate::router::structs::request_router::RequestRouter;
use crate::stats::structs::stats_tracker::StatsTracker;
use crate::transport::structs::destination_hash::DestinationHash;
use crate::transport::structs::node_identity::NodeIdentity;
use crate::transport::traits::transport::Transport;

pub struct PageNode {
    pub config: Arc<Configuration>,
    pub transport: Arc<dyn Transport>,
    pub identity: NodeIdentity,
    pub destination: DestinationHash,
    pub index: Arc<ContentIndex>,
    pub executor: Arc<DynamicPageExecutor>,
    pub stats: Arc<StatsTracker>,
    pub router: Arc<RequestRouter>,
    pub(crate) shutdown: watch::Sender<bool>,
    pub(crate) tasks: Mutex<Vec<JoinHandle<()>>>,
    pub(crate) stopped: AtomicBool,
}
