//! Test utilities for lanes

use crate::graph::Graph;
use crate::model::{Commit, Path};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Shorthand for a commit with only a hash and parents.
pub fn commit(hash: &str, parents: &[&str]) -> Commit {
    Commit::new(hash, parents.iter().copied())
}

/// A single chain: each hash's parent is the next one, the last is a root.
pub fn linear_history(hashes: &[&str]) -> Vec<Commit> {
    hashes
        .iter()
        .enumerate()
        .map(|(idx, hash)| match hashes.get(idx + 1) {
            Some(parent) => commit(hash, &[*parent]),
            None => commit(hash, &[]),
        })
        .collect()
}

/// Three branch tips that all descend from "m".
pub fn octopus_convergence() -> Vec<Commit> {
    vec![
        commit("a", &["m"]),
        commit("b", &["m"]),
        commit("c", &["m"]),
        commit("m", &["root"]),
        commit("root", &[]),
    ]
}

/// A lane opened in a reused column 0 that later joins an older lane in
/// column 2, three rows below its only vertex.
pub fn lane_shift_history() -> Vec<Commit> {
    vec![
        commit("p1", &["x"]),
        commit("p2", &["y"]),
        commit("p3", &["z"]),
        commit("x", &[]),
        commit("q", &["z"]),
        commit("y", &["w"]),
        commit("w", &[]),
        commit("z", &[]),
    ]
}

/// A merge whose second parent is already awaited by an older lane and
/// arrives on the very next row.
pub fn fork_into_pending_parent() -> Vec<Commit> {
    vec![
        commit("x", &["p"]),
        commit("m", &["a", "p"]),
        commit("p", &[]),
        commit("a", &[]),
    ]
}

/// A merged feature branch, an unrelated tip, and two lane joins.
pub fn mixed_history() -> Vec<Commit> {
    vec![
        commit("h", &["g"]),
        commit("g", &["f", "e"]),
        commit("e", &["c"]),
        commit("f", &["c"]),
        commit("t", &["s"]),
        commit("c", &["s"]),
        commit("s", &[]),
    ]
}

/// The same pattern `reps` times: a lane waits for `p_i`, then a merge forks
/// towards `p_i` just before it lands. Every fork is joined on the next row.
pub fn repeated_fork_joins(reps: usize) -> Vec<Commit> {
    (0..reps)
        .flat_map(|i| {
            let (x, m, p, a) = (format!("x{i}"), format!("m{i}"), format!("p{i}"), format!("a{i}"));
            vec![
                commit(&x, &[p.as_str()]),
                commit(&m, &[a.as_str(), p.as_str()]),
                commit(&p, &[]),
                commit(&a, &[]),
            ]
        })
        .collect()
}

/// Rightmost column used by any node or vertex, recomputed from scratch.
pub fn widest_column(graph: &Graph) -> Option<usize> {
    let node_max = graph.nodes().iter().map(|n| n.position.x).max();
    let path_max = graph.paths().iter().filter_map(Path::max_column).max();
    node_max.max(path_max)
}

/// Plain-text dump of a layout for snapshot tests.
pub fn dump(graph: &Graph) -> String {
    let mut out = format!("max_columns {}", graph.max_columns());
    for (row, node) in graph.nodes().iter().enumerate() {
        let _ = write!(
            out,
            "\nnode {} ({},{}) #{}",
            row, node.position.x, node.position.y, node.path_index
        );
    }
    for path in graph.paths() {
        let state = if path.is_complete { "complete" } else { "open" };
        let _ = write!(out, "\npath #{} {}", path.path_index, state);
        for vertex in &path.vertices {
            let _ = write!(out, " ({},{})", vertex.x, vertex.y);
        }
    }
    out
}

/// Write commits as a JSON array into a temporary directory.
pub fn write_commits_file(commits: &[Commit]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("commits.json");
    fs::write(&path, serde_json::to_string_pretty(commits).unwrap()).unwrap();
    (temp_dir, path)
}

/// Write raw text into a temporary file with the given name.
pub fn write_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
