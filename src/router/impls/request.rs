use std::collections::BTreeMap;
use log::debug;
use crate::executor::impls::dynamic_page_executor::{FIELD_PREFIX, VAR_PREFIX};
use crate::router::structs::request::Request;

impl Request {
    pub fn new<P: Into<String>, C: Into<String>>(path: P, connection_id: C) -> Request
    {
        Request {
            path: path.into(),
            form_fields: BTreeMap::new(),
            link_variables: BTreeMap::new(),
            remote_identity: None,
            connection_id: connection_id.into(),
        }
    }

    /// Builds a request from the key/value data a client attached. Keys carry
    /// a `field_` or `var_` prefix; anything else is ignored.
    pub fn from_data<P, C, I, K, V>(path: P, connection_id: C, data: I) -> Request
    where
        P: Into<String>,
        C: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Request::new(path, connection_id).with_data(data)
    }

    /// Same as [`Request::from_data`] for data sent as `key=value|key=value` bytes.
    pub fn from_data_bytes<P: Into<String>, C: Into<String>>(path: P, connection_id: C, data: &[u8]) -> Request
    {
        Request::new(path, connection_id).with_data(parse_data_bytes(data))
    }

    pub fn with_field<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Request
    {
        self.form_fields.insert(name.into(), value.into());
        self
    }

    pub fn with_variable<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Request
    {
        self.link_variables.insert(name.into(), value.into());
        self
    }

    pub fn with_remote_identity<I: Into<String>>(mut self, identity: I) -> Request
    {
        self.remote_identity = Some(identity.into());
        self
    }

    pub fn with_data<I, K, V>(mut self, data: I) -> Request
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in data {
            let key = key.as_ref();
            if let Some(name) = key.strip_prefix(FIELD_PREFIX) {
                self.form_fields.insert(name.to_string(), value.into());
            } else if let Some(name) = key.strip_prefix(VAR_PREFIX) {
                self.link_variables.insert(name.to_string(), value.into());
            } else {
                debug!("[ROUTER] Ignoring request data key without field_ or var_ prefix: {key:?}");
            }
        }
        self
    }
}

/// Splits `key=value|key=value` request data. Pairs without `=` are skipped.
pub fn parse_data_bytes(data: &[u8]) -> Vec<(String, String)>
{
    String::from_utf8_lossy(data)
        .split('|')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
