//! Atomic graph element: an identity plus a payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Byte width of a 128-bit identity, as counted by size estimates.
pub(crate) const ID_BYTES: usize = 16;

/// A single element of a [`crate::graph::Graph`].
///
/// The identity is assigned at construction and never changes; two nodes
/// with equal payloads but different identities are distinct members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: Uuid,
    pub name: String,
}

impl Node {
    /// Create a node with a fresh identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Estimated in-memory contribution of this node, in bytes.
    /// Deterministic for a given node state.
    pub fn size_estimate(&self) -> usize {
        ID_BYTES + self.name.len()
    }
}
