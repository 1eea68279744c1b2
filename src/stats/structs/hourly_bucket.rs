use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourlyBucket {
    pub requests: u64,
    pub page_requests: u64,
    pub file_requests: u64,
    pub connections: u64,
    /// Requests answered with anything but ok.
    pub errors: u64,
}
