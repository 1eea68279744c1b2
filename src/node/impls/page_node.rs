use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use futures_util::future::join_all;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinSet;
use crate::common::common::shutdown_waiting;
use crate::config::structs::configuration::Configuration;
use crate::content::enums::content_error::ContentError;
use crate::content::enums::content_section::ContentSection;
use crate::content::structs::content_index::ContentIndex;
use crate::content::structs::refresh_summary::RefreshSummary;
use crate::executor::structs::dynamic_page_executor::DynamicPageExecutor;
use crate::node::enums::node_error::NodeError;
use crate::node::structs::announce_scheduler::AnnounceScheduler;
use crate::node::structs::page_node::PageNode;
use crate::router::structs::request_router::RequestRouter;
use crate::stats::structs::stats_tracker::StatsTracker;
use crate::transport::enums::transport_event::TransportEvent;
use crate::transport::impls::destination_hash::{APP_NAME, NODE_ASPECT};
use crate::transport::traits::transport::Transport;

/// How long shutdown waits for background tasks before aborting them.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

impl PageNode {
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn start(config: Arc<Configuration>, transport: Arc<dyn Transport>) -> Result<Arc<PageNode>, NodeError>
    {
        let node_config = &config.node_config;
        let identity_dir = PathBuf::from(&node_config.identity_dir);
        let pages_dir = PathBuf::from(&node_config.pages_dir);
        let files_dir = PathBuf::from(&node_config.files_dir);
        for directory in [&identity_dir, &pages_dir, &files_dir] {
            tokio::fs::create_dir_all(directory).await
                .map_err(|source| NodeError::Directory { path: directory.clone(), source })?;
        }

        let identity = transport.load_or_create_identity(&identity_dir).await.map_err(NodeError::Identity)?;
        let destination = transport
            .register_destination(&identity, APP_NAME, &[NODE_ASPECT.to_string()])
            .await
            .map_err(NodeError::Registration)?;

        let index = Arc::new(ContentIndex::new(pages_dir, files_dir));
        if let Err(error) = run_refresh(index.clone(), None).await {
            warn!("[INDEX] Starting with an empty index: {error}");
        }

        let executor = Arc::new(DynamicPageExecutor::from_config(&config.executor_config));
        let stats = Arc::new(StatsTracker::new(&config.stats_config));
        let router = Arc::new(RequestRouter::new(index.clone(), executor.clone(), stats.clone()));
        let (shutdown, _) = watch::channel(false);

        let node = Arc::new(PageNode {
            config: config.clone(),
            transport,
            identity,
            destination,
            index,
            executor,
            stats,
            router,
            shutdown,
            tasks: Mutex::new(Vec::new()),
            stopped: AtomicBool::new(false),
        });
        node.spawn_tasks().await;
        info!("[BOOT] Page node serving {} as {}", node_config.pages_dir, node.destination);
        Ok(node)
    }

    async fn spawn_tasks(&self)
    {
        let node_config = &self.config.node_config;
        let stats_config = &self.config.stats_config;

        self.spawn(serve(self.transport.clone(), self.router.clone(), self.stats.clone(), self.shutdown.subscribe()));

        let scheduler = AnnounceScheduler::new(
            self.transport.clone(),
            self.destination,
            node_config.announce_interval,
            node_config.name.as_deref(),
        );
        self.spawn(scheduler.run(self.shutdown.subscribe()));

        for (section, interval) in [
            (ContentSection::Pages, node_config.page_refresh_interval),
            (ContentSection::Files, node_config.file_refresh_interval),
        ] {
            if interval > 0 {
                info!("[INDEX] Refreshing {} every {interval} seconds", section.prefix());
                self.spawn(refresh_loop(self.index.clone(), section, Duration::from_secs(interval), self.shutdown.subscribe()));
            }
        }

        if stats_config.interval > 0 {
            self.spawn(report_loop(self.stats.clone(), Duration::from_secs(stats_config.interval), self.shutdown.subscribe()));
        }

        if self.stats.live_file().is_some() {
            let stats = self.stats.clone();
            if let Err(error) = tokio::task::spawn_blocking(move || stats.flush_live()).await {
                error!("[STATS] Initial live stats write failed: {error}");
            }
            let interval = Duration::from_millis(stats_config.live_flush_interval_ms.max(1));
            self.spawn(self.stats.clone().run_live_writer(interval, self.shutdown.subscribe()));
        }

        if stats_config.connection_timeout > 0 {
            self.spawn(reaper_loop(self.stats.clone(), Duration::from_secs(stats_config.connection_timeout), self.shutdown.subscribe()));
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.lock().push(tokio::spawn(task));
    }

    /// Rescans both content directories now.
    pub async fn refresh(&self) -> Result<RefreshSummary, ContentError>
    {
        run_refresh(self.index.clone(), None).await
    }

    /// The destination hash peers use to reach this node, as lowercase hex.
    pub fn address(&self) -> String
    {
        self.destination.hexhash()
    }

    pub fn is_stopped(&self) -> bool
    {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Stops every background task and writes the final statistics. Only the first call does anything.
    pub async fn shutdown(&self)
    {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("[SHUTDOWN] Stopping page node...");
        self.shutdown.send_replace(true);

        let tasks = std::mem::take(&mut *self.tasks.lock());
        let abort_handles: Vec<_> = tasks.iter().map(|task| task.abort_handle()).collect();
        if tokio::time::timeout(SHUTDOWN_GRACE, join_all(tasks)).await.is_err() {
            warn!("[SHUTDOWN] Background tasks did not stop within {SHUTDOWN_GRACE:?}, aborting them");
            for handle in abort_handles {
                handle.abort();
            }
        }

        let stats = self.stats.clone();
        let save_path = self.config.stats_config.save.as_ref().map(PathBuf::from);
        match tokio::task::spawn_blocking(move || stats.shutdown(save_path.as_deref())).await {
            Ok(Ok(_)) => {}
            Ok(Err(error)) => error!("[SHUTDOWN] Final stats were not saved: {error}"),
            Err(error) => error!("[SHUTDOWN] Final stats task failed: {error}"),
        }
        info!("[SHUTDOWN] Page node stopped");
    }
}

/// Runs a full (`None`) or single-section refresh on the blocking pool.
async fn run_refresh(index: Arc<ContentIndex>, section: Option<ContentSection>) -> Result<RefreshSummary, ContentError>
{
    let root = match section {
        Some(ContentSection::Files) => index.files_root.clone(),
        _ => index.pages_root.clone(),
    };
    tokio::task::spawn_blocking(move || match section {
        None => index.refresh(),
        Some(ContentSection::Pages) => index.refresh_pages(),
        Some(ContentSection::Files) => index.refresh_files(),
    })
    .await
    .unwrap_or_else(|join_error| Err(ContentError::RefreshFailure {
        root,
        source: std::io::Error::other(join_error.to_string()),
    }))
}

/// Dispatches transport events until shutdown. In-flight requests are answered before it returns.
async fn serve(transport: Arc<dyn Transport>, router: Arc<RequestRouter>, stats: Arc<StatsTracker>, mut shutdown: watch::Receiver<bool>)
{
    let mut handlers = JoinSet::new();
    loop {
        if *shutdown.borrow() {
            break;
        }
        let event = tokio::select! {
            changed = shutdown.changed() => {
                if changed.is_err() {
                    break;
                }
                continue;
            }
            Some(_) = handlers.join_next(), if !handlers.is_empty() => continue,
            event = transport.next_event() => event,
        };

        match event {
            None => {
                info!("[TRANSPORT] Transport closed, no more requests will arrive");
                break;
            }
            Some(TransportEvent::LinkEstablished { connection_id, remote_identity }) => {
                debug!("[TRANSPORT] Link {connection_id} established");
                stats.record_connection_opened(&connection_id, remote_identity.as_deref());
            }
            Some(TransportEvent::LinkClosed { connection_id }) => {
                debug!("[TRANSPORT] Link {connection_id} closed");
                stats.record_connection_closed(&connection_id);
            }
            Some(TransportEvent::Request { request, responder }) => {
                let router = router.clone();
                handlers.spawn(async move {
                    let path = request.path.clone();
                    let response = router.handle(request).await;
                    if responder.send(response).is_err() {
                        debug!("[ROUTER] Response for {path} dropped, requester is gone");
                    }
                });
            }
        }
    }

    if !handlers.is_empty() {
        info!("[SHUTDOWN] Waiting for {} in-flight requests", handlers.len());
    }
    while let Some(result) = handlers.join_next().await {
        if let Err(error) = result {
            warn!("[ROUTER] Request handler failed: {error}");
        }
    }
}

async fn refresh_loop(index: Arc<ContentIndex>, section: ContentSection, interval: Duration, shutdown: watch::Receiver<bool>)
{
    loop {
        if shutdown_waiting(interval, shutdown.clone()).await {
            return;
        }
        // Failures are logged by the index, which keeps serving the previous snapshot.
        let _ = run_refresh(index.clone(), Some(section)).await;
    }
}

async fn report_loop(stats: Arc<StatsTracker>, interval: Duration, shutdown: watch::Receiver<bool>)
{
    loop {
        if shutdown_waiting(interval, shutdown.clone()).await {
            return;
        }
        for line in stats.format_report().lines() {
            info!("{line}");
        }
    }
}

async fn reaper_loop(stats: Arc<StatsTracker>, max_idle: Duration, shutdown: watch::Receiver<bool>)
{
    let period = (max_idle / 2).clamp(Duration::from_secs(1), Duration::from_secs(60));
    loop {
        if shutdown_waiting(period, shutdown.clone()).await {
            return;
        }
        let retired = stats.retire_idle_connections(max_idle);
        if retired > 0 {
            info!("[STATS] Retired {retired} connections idle for more than {max_idle:?}");
        }
    }
}
