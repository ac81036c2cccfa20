//! CLI command implementations

use anyhow::Context;
use lanes_core::{CONFIG_FILE, Graph, GraphBuilder, LanesConfig, RowWindow};
use std::path::{Path, PathBuf};

pub fn layout(commits: PathBuf, pretty: bool) -> anyhow::Result<()> {
    let graph = build_graph(&commits)?;
    println!("{}", to_json(&graph, pretty)?);
    Ok(())
}

pub fn frame(
    commits: PathBuf,
    start: usize,
    rows: Option<usize>,
    config: Option<PathBuf>,
    pretty: bool,
) -> anyhow::Result<()> {
    let config = load_config(&commits, config.as_deref())?;
    let graph = build_graph(&commits)?;

    let window = RowWindow::new(start, rows.unwrap_or(graph.row_count()));
    let frame = lanes_core::frame(&graph, window, &config.grid, &config.style);
    tracing::info!(
        "Rendered rows {}..{}: {} segments, {} markers",
        frame.window.start_row,
        frame.window.end_row(),
        frame.segments.len(),
        frame.markers.len()
    );

    println!("{}", to_json(&frame, pretty)?);
    Ok(())
}

/// Load commits from disk and lay them out.
pub fn build_graph(commits: &Path) -> anyhow::Result<Graph> {
    tracing::info!("Laying out {}", commits.display());

    let history = lanes_core::load_commits(commits)
        .with_context(|| format!("cannot load commits from {}", commits.display()))?;
    let graph = GraphBuilder::build(history);

    tracing::info!(
        "Laid out {} commits in {} columns ({} paths)",
        graph.row_count(),
        graph.max_columns(),
        graph.paths().len()
    );
    Ok(graph)
}

/// An explicit config must exist; otherwise look for `lanes.toml` beside the
/// commit file and fall back to defaults.
pub fn load_config(commits: &Path, explicit: Option<&Path>) -> anyhow::Result<LanesConfig> {
    let config = match explicit {
        Some(path) => LanesConfig::load(path),
        None => {
            let sibling = commits
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(CONFIG_FILE);
            LanesConfig::load_or_default(sibling)
        }
    };
    config.context("invalid configuration")
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
