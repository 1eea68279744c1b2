#[cfg(test)]
mod transport_tests {
    mod identity_tests {
        use std::fs;
        use crate::transport::enums::transport_error::TransportError;
        use crate::transport::impls::node_identity::{IDENTITY_FILE, IDENTITY_KEY_LENGTH};
        use crate::transport::structs::node_identity::NodeIdentity;

        #[tokio::test]
        async fn test_identity_is_created_once_and_reloaded() {
            let dir = tempfile::tempdir().unwrap();
            let identity_dir = dir.path().join("node-config");
            let created = NodeIdentity::load_or_create(&identity_dir).await.unwrap();
            assert_eq!(fs::read(identity_dir.join(IDENTITY_FILE)).unwrap().len(), IDENTITY_KEY_LENGTH);
            let loaded = NodeIdentity::load_or_create(&identity_dir).await.unwrap();
            assert_eq!(created, loaded);
        }

        #[tokio::test]
        async fn test_malformed_identity_is_rejected() {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join(IDENTITY_FILE), b"short").unwrap();
            let result = NodeIdentity::load_or_create(dir.path()).await;
            assert!(matches!(result, Err(TransportError::MalformedIdentity { length: 5, .. })));
        }

        #[test]
        fn test_hash_depends_on_key() {
            let first = NodeIdentity::from_key([1u8; 64]);
            let second = NodeIdentity::from_key([2u8; 64]);
            assert_ne!(first.hash, second.hash);
            assert_eq!(first.hash, NodeIdentity::from_key([1u8; 64]).hash);
            assert!(!format!("{first:?}").contains("key"));
        }
    }

    mod destination_tests {
        use crate::transport::impls::destination_hash::{APP_NAME, NODE_ASPECT};
        use crate::transport::structs::destination_hash::DestinationHash;
        use crate::transport::structs::local_transport::LocalTransport;
        use crate::transport::structs::node_identity::NodeIdentity;
        use crate::transport::traits::transport::Transport;

        #[test]
        fn test_full_name() {
            assert_eq!(DestinationHash::full_name(APP_NAME, &[NODE_ASPECT.to_string()]), "nomadnetwork.node");
        }

        #[test]
        fn test_display_is_bracketed_hex() {
            let destination = DestinationHash([0xab; 16]);
            assert_eq!(destination.to_string(), format!("<{}>", "ab".repeat(16)));
        }

        #[tokio::test]
        async fn test_register_and_announce() {
            let (transport, _links) = LocalTransport::new(None);
            let identity = NodeIdentity::from_key([7u8; 64]);
            let aspects = vec![NODE_ASPECT.to_string()];
            let destination = transport.register_destination(&identity, APP_NAME, &aspects).await.unwrap();
            assert_eq!(destination, DestinationHash::derive(&identity, APP_NAME, &aspects));
            assert_eq!(transport.destination_name(&destination).as_deref(), Some("nomadnetwork.node"));

            transport.announce(&destination, Some(b"My Node".to_vec())).await.unwrap();
            assert_eq!(transport.announce_count(), 1);
            assert_eq!(transport.last_app_data(), Some(b"My Node".to_vec()));
        }

        #[tokio::test]
        async fn test_announce_of_unknown_destination_fails() {
            let (transport, _links) = LocalTransport::new(None);
            assert!(transport.announce(&DestinationHash([0; 16]), None).await.is_err());
            assert_eq!(transport.announce_count(), 0);
        }

        #[tokio::test]
        async fn test_invalid_aspect_is_rejected() {
            let (transport, _links) = LocalTransport::new(None);
            let identity = NodeIdentity::from_key([7u8; 64]);
            let result = transport.register_destination(&identity, APP_NAME, &[String::from("bad.aspect")]).await;
            assert!(result.is_err());
        }
    }

    mod link_tests {
        use crate::router::structs::request::Request;
        use crate::router::structs::response::Response;
        use crate::transport::enums::transport_event::TransportEvent;
        use crate::transport::structs::local_transport::LocalTransport;
        use crate::transport::traits::transport::Transport;

        #[tokio::test]
        async fn test_events_flow_through_handle() {
            let (transport, links) = LocalTransport::new(None);
            let connection_id = links.open_link(Some(String::from("peer"))).await.unwrap();
            assert_eq!(connection_id.len(), 32);
            match transport.next_event().await {
                Some(TransportEvent::LinkEstablished { connection_id: id, remote_identity }) => {
                    assert_eq!(id, connection_id);
                    assert_eq!(remote_identity.as_deref(), Some("peer"));
                }
                other => panic!("unexpected event {other:?}"),
            }

            let requester = links.clone();
            let id = connection_id.clone();
            let pending = tokio::spawn(async move { requester.request(Request::new("/page/index.mu", id)).await });
            match transport.next_event().await {
                Some(TransportEvent::Request { request, responder }) => {
                    assert_eq!(request.path, "/page/index.mu");
                    responder.send(Response::page(b">Hi".to_vec())).unwrap();
                }
                other => panic!("unexpected event {other:?}"),
            }
            assert_eq!(pending.await.unwrap().unwrap().body, b">Hi");

            links.close_link(&connection_id).await.unwrap();
            assert!(matches!(transport.next_event().await, Some(TransportEvent::LinkClosed { .. })));
        }

        #[tokio::test]
        async fn test_dropped_handles_end_event_stream() {
            let (transport, links) = LocalTransport::new(None);
            drop(links);
            assert!(transport.next_event().await.is_none());
        }
    }
}
