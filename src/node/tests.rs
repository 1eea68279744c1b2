#[cfg(test)]
mod node_tests {
    mod announce_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::sync::watch;
        use crate::node::structs::announce_scheduler::AnnounceScheduler;
        use crate::transport::impls::destination_hash::{APP_NAME, NODE_ASPECT};
        use crate::transport::structs::destination_hash::DestinationHash;
        use crate::transport::structs::local_transport::LocalTransport;
        use crate::transport::structs::node_identity::NodeIdentity;
        use crate::transport::traits::transport::Transport;

        async fn registered() -> (Arc<LocalTransport>, DestinationHash) {
            let (transport, _links) = LocalTransport::new(None);
            let transport = Arc::new(transport);
            let identity = NodeIdentity::from_key([3u8; 64]);
            let destination = transport.register_destination(&identity, APP_NAME, &[NODE_ASPECT.to_string()]).await.unwrap();
            (transport, destination)
        }

        #[test]
        fn test_interval_is_in_minutes() {
            let (transport, _links) = LocalTransport::new(None);
            let scheduler = AnnounceScheduler::new(Arc::new(transport), DestinationHash([0; 16]), 360, None);
            assert_eq!(scheduler.interval, Duration::from_secs(360 * 60));
            assert!(scheduler.is_enabled());
        }

        #[tokio::test]
        async fn test_zero_interval_never_announces() {
            let (transport, destination) = registered().await;
            let scheduler = AnnounceScheduler::new(transport.clone(), destination, 0, Some("Node"));
            let (_shutdown, receiver) = watch::channel(false);
            scheduler.run(receiver).await;
            assert_eq!(transport.announce_count(), 0);
        }

        #[tokio::test]
        async fn test_announces_immediately_and_periodically() {
            let (transport, destination) = registered().await;
            let scheduler = AnnounceScheduler::with_interval(transport.clone(), destination, Duration::from_millis(50), Some("My Node"));
            let (shutdown, receiver) = watch::channel(false);
            let task = tokio::spawn(scheduler.run(receiver));
            tokio::time::sleep(Duration::from_millis(180)).await;
            shutdown.send_replace(true);
            task.await.unwrap();
            assert!(transport.announce_count() >= 2);
            assert_eq!(transport.last_app_data(), Some(b"My Node".to_vec()));
        }

        #[tokio::test]
        async fn test_failed_announce_is_not_fatal() {
            let (transport, _links) = LocalTransport::new(None);
            let scheduler = AnnounceScheduler::new(Arc::new(transport), DestinationHash([9; 16]), 1, None);
            assert!(!scheduler.announce_now().await);
        }
    }

    mod startup_tests {
        use std::sync::Arc;
        use crate::config::structs::configuration::Configuration;
        use crate::node::enums::node_error::NodeError;
        use crate::node::structs::page_node::PageNode;
        use crate::transport::structs::local_transport::LocalTransport;

        #[tokio::test]
        async fn test_unusable_identity_directory_is_fatal() {
            let dir = tempfile::tempdir().unwrap();
            let blocker = dir.path().join("identity-dir");
            std::fs::write(&blocker, b"not a directory").unwrap();

            let mut config = Configuration::init();
            config.node_config.identity_dir = blocker.to_string_lossy().into_owned();
            config.node_config.pages_dir = dir.path().join("pages").to_string_lossy().into_owned();
            config.node_config.files_dir = dir.path().join("files").to_string_lossy().into_owned();
            let (transport, _links) = LocalTransport::new(None);
            let result = PageNode::start(Arc::new(config), Arc::new(transport)).await;
            assert!(matches!(result, Err(NodeError::Directory { .. })));
        }

        #[tokio::test]
        async fn test_malformed_identity_is_fatal() {
            let dir = tempfile::tempdir().unwrap();
            let identity_dir = dir.path().join("node-config");
            std::fs::create_dir_all(&identity_dir).unwrap();
            std::fs::write(identity_dir.join("identity"), b"broken").unwrap();

            let mut config = Configuration::init();
            config.node_config.identity_dir = identity_dir.to_string_lossy().into_owned();
            config.node_config.pages_dir = dir.path().join("pages").to_string_lossy().into_owned();
            config.node_config.files_dir = dir.path().join("files").to_string_lossy().into_owned();
            let (transport, _links) = LocalTransport::new(None);
            let result = PageNode::start(Arc::new(config), Arc::new(transport)).await;
            assert!(matches!(result, Err(NodeError::Identity(_))));
        }
    }
}
