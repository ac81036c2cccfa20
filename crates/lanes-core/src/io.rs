//! Reading commit histories from JSON

use crate::error::{LanesError, Result};
use crate::model::Commit;
use serde::Deserialize;
use std::path::Path;

/// Accepted top-level shapes of a commit file.
#[derive(Deserialize)]
#[serde(untagged)]
enum CommitFile {
    List(Vec<Commit>),
    Wrapped { commits: Vec<Commit> },
}

/// Parse commits from JSON: either a bare array or `{"commits": [...]}`.
/// Commits must already be in row order, most recent first.
pub fn parse_commits(json: &str) -> Result<Vec<Commit>> {
    let commits = match serde_json::from_str(json)? {
        CommitFile::List(commits) | CommitFile::Wrapped { commits } => commits,
    };
    Ok(commits)
}

/// Load commits from a JSON file.
pub fn load_commits(path: impl AsRef<Path>) -> Result<Vec<Commit>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| LanesError::read_file(path, e))?;
    let commits = parse_commits(&json)?;
    tracing::debug!("Loaded {} commits from {}", commits.len(), path.display());
    Ok(commits)
}
