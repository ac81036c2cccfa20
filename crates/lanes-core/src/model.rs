//! Core data structures for the commit graph

use serde::{Deserialize, Serialize};

/// Who wrote a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A single commit as supplied by the history source.
///
/// Row order is the order commits are fed to the builder: row 0 is the most
/// recent commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    #[serde(default)]
    pub message: String,
    /// Parent hashes. The first parent continues the commit's own lane.
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl Commit {
    /// Create a commit with no labels or author.
    pub fn new<I, S>(hash: impl Into<String>, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Commit {
            hash: hash.into(),
            message: String::new(),
            parents: parents.into_iter().map(Into::into).collect(),
            branches: None,
            tags: None,
            author: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branches = Some(branches.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// A commit with no parents is the root of its history.
    pub fn is_orphan(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// A position in graph space: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}

/// The geometry of one lane over its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Stable color/identity index. Never reused within a graph.
    pub path_index: usize,
    /// Polyline vertices, non-decreasing in `y`. Only lane lifecycle events
    /// and column changes emit a vertex; straight runs are implied.
    pub vertices: Vec<Point>,
    /// Set once the owning lane leaves the active set.
    pub is_complete: bool,
}

impl Path {
    pub(crate) fn starting_at(path_index: usize, origin: Point) -> Self {
        Path {
            path_index,
            vertices: vec![origin],
            is_complete: false,
        }
    }

    pub fn first_vertex(&self) -> Option<Point> {
        self.vertices.first().copied()
    }

    pub fn last_vertex(&self) -> Option<Point> {
        self.vertices.last().copied()
    }

    /// Rightmost column any vertex touches.
    pub fn max_column(&self) -> Option<usize> {
        self.vertices.iter().map(|v| v.x).max()
    }
}

/// A commit marker drawn at the commit's row in its lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub position: Point,
    pub path_index: usize,
}
