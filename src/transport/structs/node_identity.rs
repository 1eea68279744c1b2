/// Private key material plus its public hash. `Debug` only shows the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct NodeIdentity {
    pub(crate) key: [u8; 64],
    pub hash: [u8; 16],
}
