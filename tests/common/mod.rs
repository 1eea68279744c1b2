#![allow(dead_code)]
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use rand::RngExt;
use tempfile::TempDir;
use rns_page_node::config::structs::configuration::Configuration;
use rns_page_node::content::structs::content_index::ContentIndex;
use rns_page_node::executor::structs::dynamic_page_executor::DynamicPageExecutor;
use rns_page_node::router::structs::request_router::RequestRouter;
use rns_page_node::stats::structs::stats_tracker::StatsTracker;

pub type TestRouter = Arc<RequestRouter>;

/// A temporary node layout with `pages/` and `files/` populated with a few entries.
pub fn create_content_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let pages = dir.path().join("pages");
    let files = dir.path().join("files");
    fs::create_dir_all(pages.join("blog")).unwrap();
    fs::create_dir_all(files.join("docs")).unwrap();
    fs::write(pages.join("index.mu"), ">Welcome\n\nThis is a test node.\n").unwrap();
    fs::write(pages.join("blog/first.mu"), ">First Post\n").unwrap();
    fs::write(files.join("readme.txt"), "read me\n").unwrap();
    fs::write(files.join("docs/manual.pdf"), random_bytes(2048)).unwrap();
    dir
}

#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    fs::write(path, body).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

pub fn create_test_router(root: &Path, timeout: Duration) -> TestRouter {
    let index = Arc::new(ContentIndex::new(root.join("pages"), root.join("files")));
    index.refresh().unwrap();
    let executor = Arc::new(DynamicPageExecutor::new(timeout, 8));
    let stats = Arc::new(StatsTracker::with_limits(100, 24));
    Arc::new(RequestRouter::new(index, executor, stats))
}

/// A configuration rooted in `root` with announces and background timers off.
pub fn create_test_config(root: &Path) -> Configuration {
    let mut config = Configuration::init();
    config.log_level = String::from("off");
    config.node_config.pages_dir = root.join("pages").to_string_lossy().into_owned();
    config.node_config.files_dir = root.join("files").to_string_lossy().into_owned();
    config.node_config.identity_dir = root.join("node-config").to_string_lossy().into_owned();
    config.node_config.announce_interval = 0;
    config.executor_config.timeout = 5;
    config
}

pub fn random_bytes(length: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..length).map(|_| rng.random()).collect()
}

pub fn random_connection_id() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    hex::encode(bytes)
}
