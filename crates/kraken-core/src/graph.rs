//! Named, identity-tracked container of nodes with lifecycle timestamps.

use crate::error::KrakenError;
use crate::node::{ID_BYTES, Node};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A named collection of nodes, persisted one file per graph.
///
/// Nodes keep insertion order and are deduplicated by identity. `created`
/// is set once at construction, `modified` on every structural change, and
/// `saved` when a write to disk has been confirmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub saved: DateTime<Utc>,
    nodes: Vec<Node>,
    /// Performance index: node id → offset in `nodes`.
    /// Rebuilt on load and after removals via `rebuild_node_index()`.
    #[serde(skip)]
    node_index: HashMap<Uuid, usize>,
}

impl Graph {
    /// Create an empty graph with a fresh identity.
    ///
    /// A graph that has never been written carries its creation instant as
    /// the `saved` timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created: now,
            modified: now,
            saved: now,
            nodes: Vec::new(),
            node_index: HashMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add a node to the end of the sequence.
    ///
    /// Membership is identity-based: a node whose id is already present is
    /// ignored, while equal payloads under different ids are both retained.
    pub fn add_node(&mut self, node: Node) {
        if self.node_index.contains_key(&node.id()) {
            return;
        }
        self.node_index.insert(node.id(), self.nodes.len());
        self.nodes.push(node);
        self.modified = Utc::now();
    }

    /// Remove a node by identity, preserving the order of the remaining
    /// nodes. Unknown ids are a no-op returning `None`.
    pub fn remove_node(&mut self, id: Uuid) -> Option<Node> {
        let pos = self.node_index.remove(&id)?;
        let node = self.nodes.remove(pos);
        self.rebuild_node_index();
        self.modified = Utc::now();
        Some(node)
    }

    /// Find a node by the canonical string form of its id.
    pub fn find_node(&self, id: &str) -> Result<&Node, KrakenError> {
        let uid = Uuid::parse_str(id)?;
        self.node_index
            .get(&uid)
            .and_then(|&pos| self.nodes.get(pos))
            .ok_or(KrakenError::NodeNotFound(uid))
    }

    /// Estimated in-memory size in bytes: identity + name + every node.
    /// A diagnostic figure, not an exact footprint.
    pub fn size_estimate(&self) -> usize {
        ID_BYTES
            + self.name.len()
            + self.nodes.iter().map(Node::size_estimate).sum::<usize>()
    }

    /// Rebuild the position index from the node list.
    pub(crate) fn rebuild_node_index(&mut self) {
        self.node_index.clear();
        for (pos, node) in self.nodes.iter().enumerate() {
            self.node_index.insert(node.id(), pos);
        }
    }
}
