//! Error types shared across the crate.

use std::path::PathBuf;
use uuid::Uuid;

/// Errors produced by graph, engine, and storage operations.
///
/// Lookup misses and malformed identifier strings are distinct kinds: a
/// caller passing `"not-an-id"` gets [`KrakenError::InvalidId`], never a
/// not-found variant.
#[derive(Debug, thiserror::Error)]
pub enum KrakenError {
    /// The identifier string is not a well-formed UUID.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] uuid::Error),
    /// No graph with this identity is registered.
    #[error("no graph with id {0}")]
    GraphNotFound(Uuid),
    /// No graph with this name is registered.
    #[error("no graph named {0:?}")]
    NameNotFound(String),
    /// No node with this identity exists in the graph.
    #[error("no node with id {0}")]
    NodeNotFound(Uuid),
    /// A file could not be read, written, or scanned.
    #[error("failed to {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Serialized graph text could not be decoded.
    #[error("malformed graph text: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration file could not be decoded.
    #[error("malformed config: {0}")]
    Config(#[from] toml::de::Error),
}
