//! Read/write graph files from disk.

use crate::error::KrakenError;
use crate::graph::Graph;
use crate::schema;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension for persisted graphs.
pub const FILE_SUFFIX: &str = ".kraken";

/// Path of the file backing a graph with the given name.
pub fn graph_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}{FILE_SUFFIX}"))
}

/// Check whether a persisted graph with the given name exists in `dir`.
pub fn graph_exists(dir: &Path, name: &str) -> bool {
    graph_file(dir, name).exists()
}

/// Load a graph by name from `dir`.
pub fn load_graph(dir: &Path, name: &str) -> Result<Graph, KrakenError> {
    let path = graph_file(dir, name);
    let text = fs::read_to_string(&path).map_err(|source| KrakenError::Io {
        op: "read",
        path: path.clone(),
        source,
    })?;
    let graph = schema::from_json(&text)?;
    tracing::debug!(name, id = %graph.id(), "loaded graph");
    Ok(graph)
}

/// Save a graph to `<dir>/<name>.kraken`, overwriting any existing file.
/// Returns the path written.
///
/// The written snapshot carries a fresh `saved` stamp; the in-memory graph
/// takes the same stamp only after the write has succeeded, so a failed
/// write leaves it untouched.
pub fn save_graph(dir: &Path, graph: &mut Graph) -> Result<PathBuf, KrakenError> {
    let stamp = Utc::now();
    let mut snapshot = graph.clone();
    snapshot.saved = stamp;
    let text = schema::to_json(&snapshot)?;

    let path = graph_file(dir, &graph.name);
    fs::write(&path, text).map_err(|source| KrakenError::Io {
        op: "write",
        path: path.clone(),
        source,
    })?;

    graph.saved = stamp;
    tracing::debug!(name = %graph.name, path = %path.display(), "saved graph");
    Ok(path)
}
