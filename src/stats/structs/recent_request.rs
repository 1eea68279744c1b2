use serde::{Deserialize, Serialize};
use crate::router::enums::response_status::ResponseStatus;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecentRequest {
    pub timestamp: i64,
    pub path: String,
    pub peer: String,
    pub status: ResponseStatus,
}
