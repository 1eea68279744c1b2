use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    /// Micron markup, displayed by the client.
    Page,
    /// A download; the client saves it under `name`.
    File { name: String },
}
