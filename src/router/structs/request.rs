use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub path: String,
    /// Form fields, keyed by their bare name.
    pub form_fields: BTreeMap<String, String>,
    /// Link variables, keyed by their bare name.
    pub link_variables: BTreeMap<String, String>,
    pub remote_identity: Option<String>,
    pub connection_id: String,
}
