//! Canonical JSON codec for graphs and engine snapshots.

use crate::engine::Engine;
use crate::error::KrakenError;
use crate::graph::Graph;

/// Serialize a graph to pretty-printed JSON.
pub fn to_json(graph: &Graph) -> Result<String, KrakenError> {
    Ok(serde_json::to_string_pretty(graph)?)
}

/// Deserialize a graph from JSON produced by [`to_json`].
///
/// Exact inverse for every serialized field; the node position index is
/// rebuilt here since it is not part of the persisted form.
pub fn from_json(text: &str) -> Result<Graph, KrakenError> {
    let mut graph: Graph = serde_json::from_str(text)?;
    graph.rebuild_node_index();
    Ok(graph)
}

/// Serialize an engine and all member graphs to pretty-printed JSON.
///
/// A diagnostic snapshot — graphs are persisted individually through
/// [`crate::storage`], never as one engine document.
pub fn engine_to_json(engine: &Engine) -> Result<String, KrakenError> {
    Ok(serde_json::to_string_pretty(engine)?)
}
