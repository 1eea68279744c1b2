use std::fmt;
use sha1::{Digest, Sha1};
use crate::common::common::{hexrep, prettyhexrep};
use crate::transport::structs::destination_hash::DestinationHash;
use crate::transport::structs::node_identity::NodeIdentity;

pub const APP_NAME: &str = "nomadnetwork";
pub const NODE_ASPECT: &str = "node";

impl DestinationHash {
    /// `app_name.aspect1.aspect2...`
    pub fn full_name(app_name: &str, aspects: &[String]) -> String
    {
        std::iter::once(app_name)
            .chain(aspects.iter().map(String::as_str))
            .collect::<Vec<&str>>()
            .join(".")
    }

    pub fn derive(identity: &NodeIdentity, app_name: &str, aspects: &[String]) -> DestinationHash
    {
        let mut hasher = Sha1::new();
        hasher.update(identity.hash);
        hasher.update(Self::full_name(app_name, aspects).as_bytes());
        let digest = hasher.finalize();
        let mut hash = [0u8; 16];
        hash.copy_from_slice(&digest[..16]);
        DestinationHash(hash)
    }

    pub fn hexhash(&self) -> String
    {
        hexrep(&self.0)
    }
}

impl fmt::Display for DestinationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&prettyhexrep(&self.0))
    }
}
