use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio::sync::watch;
use rns_page_node::common::common::{setup_logging, shutdown_waiting};
use rns_page_node::config::structs::configuration::Configuration;
use rns_page_node::node::structs::page_node::PageNode;
use rns_page_node::structs::Cli;
use rns_page_node::transport::structs::local_transport::LocalTransport;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_cli(&args) {
        Ok(config) => Arc::new(config),
        Err(error) => {
            // Logging is not set up yet.
            eprintln!("[CONFIG] {error}");
            exit(101)
        }
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .thread_name("core")
        .enable_all()
        .build()?
        .block_on(async {
            let (deadlocks_tx, deadlocks_rx) = watch::channel(false);
            let deadlocks_task = tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                loop {
                    if shutdown_waiting(Duration::from_secs(30), deadlocks_rx.clone()).await {
                        info!("[BOOT] Shutting down thread for deadlocks...");
                        return;
                    }
                    let deadlocks = deadlock::check_deadlock();
                    if !deadlocks.is_empty() {
                        error!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                        for (i, threads) in deadlocks.iter().enumerate() {
                            error!("[DEADLOCK] #{i}");
                            for t in threads {
                                error!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                error!("[DEADLOCK] {:#?}", t.backtrace());
                            }
                        }
                    }
                }
            });

            let reticulum_config = config.node_config.reticulum_config.as_ref().map(PathBuf::from);
            // Keep the link handle alive for the whole run, dropping it closes the event stream.
            let (transport, _links) = LocalTransport::new(reticulum_config);

            let node = match PageNode::start(config.clone(), Arc::new(transport)).await {
                Ok(node) => node,
                Err(error) => {
                    error!("[BOOT] Unable to start the page node: {error}");
                    exit(1);
                }
            };
            info!("[BOOT] Node address: {}", node.address());

            wait_for_signal().await;
            info!("[SHUTDOWN] Signal received, shutting down...");

            node.shutdown().await;
            deadlocks_tx.send_replace(true);
            let _ = deadlocks_task.await;

            info!("[SHUTDOWN] Goodbye");
            Ok(())
        })
}

async fn wait_for_signal()
{
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
                return;
            }
            Err(error) => error!("[BOOT] Unable to listen for SIGTERM: {error}"),
        }
    }
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("[BOOT] Unable to listen for Ctrl-C: {error}");
    }
}
