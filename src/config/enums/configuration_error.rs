use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Unable to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config file {path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Unable to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to serialize the default configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The config file was unusable and `--create-config` was not given.
    #[error("No usable config file at {path}, write one or start with --create-config")]
    Unusable { path: PathBuf },
    /// A default config was written; the node stops so it can be edited.
    #[error("Wrote a default config to {path}, edit it and start again")]
    Created { path: PathBuf },
    #[error("[VALIDATE CONFIG] {field} {value:?} does not match {pattern}")]
    InvalidValue {
        field: &'static str,
        value: String,
        pattern: &'static str,
    },
    #[error("[VALIDATE CONFIG] Invalid check for {field}: {source}")]
    InvalidCheck {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("[VALIDATE CONFIG] {0}")]
    OutOfRange(&'static str),
}
