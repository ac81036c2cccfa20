//! Laid-out commit graph handed to renderers

use crate::model::*;
use serde::{Deserialize, Serialize};

/// The layout of a commit history: one row per commit, the paths that
/// connect them, and one node per commit.
///
/// Only [`GraphBuilder`](crate::builder::GraphBuilder) mutates a graph;
/// renderers read it through the accessors below.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Graph {
    pub(crate) commits: Vec<Commit>,
    pub(crate) paths: Vec<Path>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) max_columns: usize,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("row_count", &self.commits.len())
            .field("path_count", &self.paths.len())
            .field("max_columns", &self.max_columns)
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input commits in row order, untouched.
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Nodes in row order; `nodes()[row]` belongs to `commits()[row]`.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Widest column ever used plus one. Zero for an empty graph.
    pub fn max_columns(&self) -> usize {
        self.max_columns
    }

    /// Number of rows laid out so far.
    pub fn row_count(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Get the commit laid out at a row.
    pub fn commit(&self, row: usize) -> Option<&Commit> {
        self.commits.get(row)
    }

    /// Get the node laid out at a row.
    pub fn node(&self, row: usize) -> Option<&Node> {
        self.nodes.get(row)
    }

    /// Find the row of a commit by hash (first match).
    pub fn row_of(&self, hash: &str) -> Option<usize> {
        self.commits.iter().position(|c| c.hash == hash)
    }

    /// Find the path carrying a given color/identity index.
    pub fn path_by_index(&self, path_index: usize) -> Option<&Path> {
        self.paths.iter().find(|p| p.path_index == path_index)
    }

    /// Paths still waiting for an ancestor that has not arrived yet.
    pub fn open_paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().filter(|p| !p.is_complete)
    }
}
