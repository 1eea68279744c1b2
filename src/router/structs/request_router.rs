use std::sync::Arc;
use crate::content::structs::content_index::ContentIndex;
use crate::executor::structs::dynamic_page_executor::DynamicPageExecutor;
use crate::stats::structs::stats_tracker::StatsTracker;

#[derive(Debug)]
pub struct RequestRouter {
    pub index: Arc<ContentIndex>,
    pub executor: Arc<DynamicPageExecutor>,
    pub stats: Arc<StatsTracker>,
}
