//! Error types for the fallible edges of the library
//!
//! Rendering never fails; only loading configuration and decoding node trees do.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid node tree: {0}")]
    Ast(#[source] serde_json::Error),

    #[error("unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("unknown style key: {0}")]
    UnknownStyleKey(String),
}

pub type Result<T> = std::result::Result<T, Error>;
