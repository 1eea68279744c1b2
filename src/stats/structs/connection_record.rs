use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub connection_id: String,
    pub peer: Option<String>,
    pub established: i64,
    pub last_activity: i64,
    pub requests: u64,
}
