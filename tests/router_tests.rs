// Integration tests for request routing

mod common;

use std::fs;
use std::time::Duration;
use rns_page_node::router::enums::content_kind::ContentKind;
use rns_page_node::router::enums::response_status::ResponseStatus;
use rns_page_node::router::structs::request::Request;

#[tokio::test]
async fn test_home_page_and_listing() {
    let dir = common::create_content_tree();
    let router = common::create_test_router(dir.path(), Duration::from_secs(5));

    let home = router.handle(Request::new("", common::random_connection_id())).await;
    assert_eq!(home.status, ResponseStatus::Ok, "Empty path should serve the home page");
    assert!(home.body.starts_with(b">Welcome"));

    let listing = router.handle(Request::new("/file", common::random_connection_id())).await;
    let body = String::from_utf8(listing.body).unwrap();
    assert!(body.contains("`[docs/`:/file/docs]  directory"), "Listing should show subdirectories: {body}");
    assert!(body.contains("`[readme.txt`:/file/readme.txt]  file, 8 B"));
    assert!(!body.contains("`[..`"), "Section roots have no parent link");
}

#[tokio::test]
async fn test_file_download() {
    let dir = common::create_content_tree();
    let router = common::create_test_router(dir.path(), Duration::from_secs(5));
    let expected = fs::read(dir.path().join("files/docs/manual.pdf")).unwrap();

    let response = router.handle(Request::new("/file/docs/manual.pdf", "link")).await;
    assert!(response.is_ok());
    assert_eq!(response.body, expected, "File bytes should be served unchanged");
    assert_eq!(response.content_kind, ContentKind::File { name: String::from("manual.pdf") });
}

#[tokio::test]
async fn test_unknown_and_hostile_paths() {
    let dir = common::create_content_tree();
    let router = common::create_test_router(dir.path(), Duration::from_secs(5));

    for path in ["/page/missing.mu", "/other/index.mu", "/page/../files/readme.txt", "/file/.hidden"] {
        let response = router.handle(Request::new(path, "link")).await;
        assert_eq!(response.status, ResponseStatus::NotFound, "{path} should not resolve");
    }
    assert_eq!(router.stats.get_stats().not_found, 4);
}

#[tokio::test]
async fn test_requests_after_refresh_see_new_content() {
    let dir = common::create_content_tree();
    let router = common::create_test_router(dir.path(), Duration::from_secs(5));
    fs::write(dir.path().join("pages/new.mu"), ">New\n").unwrap();

    let before = router.handle(Request::new("/page/new.mu", "link")).await;
    assert_eq!(before.status, ResponseStatus::NotFound, "Unindexed pages are not served");

    router.index.refresh().unwrap();
    let after = router.handle(Request::new("/page/new.mu", "link")).await;
    assert_eq!(after.status, ResponseStatus::Ok);
}

#[cfg(unix)]
#[tokio::test]
async fn test_dynamic_page_timeout_response() {
    let dir = common::create_content_tree();
    common::write_script(&dir.path().join("pages/slow.mu"), "#!/bin/sh\nsleep 10\n");
    let router = common::create_test_router(dir.path(), Duration::from_millis(300));

    let started = std::time::Instant::now();
    let response = router.handle(Request::new("/page/slow.mu", "link")).await;
    assert_eq!(response.status, ResponseStatus::Timeout);
    assert!(started.elapsed() < Duration::from_secs(5), "Timeout should cut the page short");
    assert!(String::from_utf8(response.body).unwrap().starts_with(">Page Timeout"));
    assert_eq!(router.stats.get_stats().timeouts, 1);
}

#[cfg(unix)]
#[tokio::test]
async fn test_dynamic_page_sees_request_context() {
    let dir = common::create_content_tree();
    common::write_script(
        &dir.path().join("pages/whoami.mu"),
        "#!/bin/sh\nprintf '%s|%s|%s' \"$field_user\" \"$var_topic\" \"$remote_identity\"\n",
    );
    let router = common::create_test_router(dir.path(), Duration::from_secs(5));

    let request = Request::from_data_bytes("/page/whoami.mu", "link", b"field_user=alice|var_topic=mesh")
        .with_remote_identity("abcdef");
    let response = router.handle(request).await;
    assert_eq!(response.body, b"alice|mesh|abcdef");
}
