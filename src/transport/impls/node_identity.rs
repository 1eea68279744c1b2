use std::fmt;
use std::path::Path;
use log::info;
use rand::RngExt;
use sha1::{Digest, Sha1};
use crate::common::common::{hexrep, prettyhexrep};
use crate::transport::enums::transport_error::TransportError;
use crate::transport::structs::node_identity::NodeIdentity;

pub const IDENTITY_FILE: &str = "identity";
pub const IDENTITY_KEY_LENGTH: usize = 64;

impl NodeIdentity {
    pub fn generate() -> NodeIdentity
    {
        let mut rng = rand::rng();
        let first: [u8; 32] = rng.random();
        let second: [u8; 32] = rng.random();
        let mut key = [0u8; IDENTITY_KEY_LENGTH];
        key[..32].copy_from_slice(&first);
        key[32..].copy_from_slice(&second);
        Self::from_key(key)
    }

    pub fn from_key(key: [u8; IDENTITY_KEY_LENGTH]) -> NodeIdentity
    {
        let mut hasher = Sha1::new();
        hasher.update(key);
        let digest = hasher.finalize();
        let mut hash = [0u8; 16];
        hash.copy_from_slice(&digest[..16]);
        NodeIdentity { key, hash }
    }

    pub fn from_bytes(path: &Path, data: &[u8]) -> Result<NodeIdentity, TransportError>
    {
        let key = <[u8; IDENTITY_KEY_LENGTH]>::try_from(data)
            .map_err(|_| TransportError::MalformedIdentity { path: path.to_path_buf(), length: data.len() })?;
        Ok(Self::from_key(key))
    }

    /// Reads `<dir>/identity`, creating the directory and a fresh identity if it does not exist yet.
    pub async fn load_or_create(identity_dir: &Path) -> Result<NodeIdentity, TransportError>
    {
        let path = identity_dir.join(IDENTITY_FILE);
        match tokio::fs::read(&path).await {
            Ok(data) => {
                let identity = Self::from_bytes(&path, &data)?;
                info!("[TRANSPORT] Loaded identity {} from {}", prettyhexrep(&identity.hash), path.display());
                Ok(identity)
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tokio::fs::create_dir_all(identity_dir).await?;
                let identity = Self::generate();
                write_private(&path, &identity.key).await?;
                info!("[TRANSPORT] Created identity {} in {}", prettyhexrep(&identity.hash), path.display());
                Ok(identity)
            }
            Err(error) => Err(TransportError::Io(error)),
        }
    }

    pub fn hexhash(&self) -> String
    {
        hexrep(&self.hash)
    }
}

impl fmt::Debug for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("NodeIdentity").field("hash", &self.hexhash()).finish_non_exhaustive()
    }
}

#[cfg(unix)]
async fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()>
{
    use tokio::io::AsyncWriteExt;
    let mut file = tokio::fs::OpenOptions::new().write(true).create_new(true).mode(0o600).open(path).await?;
    file.write_all(data).await?;
    file.sync_all().await
}

#[cfg(not(unix))]
async fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()>
{
    tokio::fs::write(path, data).await
}
