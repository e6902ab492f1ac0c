//! Registry of named graphs: membership, lookup, and bulk persistence.

use crate::error::KrakenError;
use crate::graph::Graph;
use crate::storage::{self, FILE_SUFFIX};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Top-level registry owning a set of graphs, keyed by graph identity.
///
/// Membership is a set: adding a graph whose identity is already present
/// replaces it. Callers get no ordering promise over the membership.
///
/// All operations are synchronous and the engine carries no internal
/// locking; concurrent use needs external synchronization.
#[derive(Debug, Serialize)]
pub struct Engine {
    id: Uuid,
    started: DateTime<Utc>,
    graphs: BTreeMap<Uuid, Graph>,
}

/// Outcome of [`Engine::load_directory`].
///
/// Files that match the suffix but fail to load are collected here rather
/// than aborting the scan or being silently skipped.
#[derive(Debug, Default)]
pub struct DirectoryLoad {
    /// Identities of graphs added to the engine.
    pub loaded: Vec<Uuid>,
    /// Files that matched the suffix but could not be loaded.
    pub failures: Vec<(PathBuf, KrakenError)>,
}

impl Engine {
    /// Create an engine with a fresh identity and empty membership.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started: Utc::now(),
            graphs: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started(&self) -> DateTime<Utc> {
        self.started
    }

    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    /// Member graphs, in no promised order.
    pub fn graphs(&self) -> impl Iterator<Item = &Graph> {
        self.graphs.values()
    }

    /// Add a graph to the membership. Idempotent per identity: inserting
    /// the same graph id again replaces the previous member.
    pub fn add_graph(&mut self, graph: Graph) {
        self.graphs.insert(graph.id(), graph);
    }

    /// Remove a graph from the membership. Never touches persisted files.
    pub fn drop_graph(&mut self, id: Uuid) -> Option<Graph> {
        self.graphs.remove(&id)
    }

    /// Mutable access to a member graph by identity.
    pub fn graph_mut(&mut self, id: Uuid) -> Option<&mut Graph> {
        self.graphs.get_mut(&id)
    }

    /// Find a member graph by the canonical string form of its id.
    pub fn find_graph(&self, id: &str) -> Result<&Graph, KrakenError> {
        let uid = Uuid::parse_str(id)?;
        self.graphs
            .get(&uid)
            .ok_or(KrakenError::GraphNotFound(uid))
    }

    /// Find the first member graph with the given name.
    ///
    /// Names are not enforced unique; when duplicates exist, which match
    /// is returned is unspecified.
    pub fn find_graph_by_name(&self, name: &str) -> Result<&Graph, KrakenError> {
        self.graphs
            .values()
            .find(|g| g.name == name)
            .ok_or_else(|| KrakenError::NameNotFound(name.to_string()))
    }

    /// Load every graph file in `dir` (non-recursive) into the membership.
    ///
    /// Entries are filtered by the [`FILE_SUFFIX`] extension; the graph
    /// name is the file name with the suffix stripped. A file that fails
    /// to load is recorded in [`DirectoryLoad::failures`] and logged, and
    /// the scan continues. Only failing to read the directory itself is
    /// a hard error.
    pub fn load_directory(&mut self, dir: &Path) -> Result<DirectoryLoad, KrakenError> {
        let entries = fs::read_dir(dir).map_err(|source| KrakenError::Io {
            op: "scan",
            path: dir.to_path_buf(),
            source,
        })?;

        let mut report = DirectoryLoad::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    report.failures.push((
                        dir.to_path_buf(),
                        KrakenError::Io {
                            op: "scan",
                            path: dir.to_path_buf(),
                            source,
                        },
                    ));
                    continue;
                }
            };
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str().and_then(|f| f.strip_suffix(FILE_SUFFIX))
            else {
                continue;
            };
            match storage::load_graph(dir, name) {
                Ok(graph) => {
                    report.loaded.push(graph.id());
                    self.add_graph(graph);
                }
                Err(err) => {
                    tracing::warn!(path = %entry.path().display(), error = %err, "skipping unloadable graph file");
                    report.failures.push((entry.path(), err));
                }
            }
        }
        Ok(report)
    }

    /// Persist a member graph to `dir`. Returns the path written.
    ///
    /// Delegates to [`storage::save_graph`], which commits the `saved`
    /// stamp only after the write is confirmed.
    pub fn save_graph(&mut self, dir: &Path, id: Uuid) -> Result<PathBuf, KrakenError> {
        let graph = self
            .graphs
            .get_mut(&id)
            .ok_or(KrakenError::GraphNotFound(id))?;
        storage::save_graph(dir, graph)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
