//! Integration tests for Lanes
//!
//! These tests drive the CLI binary against commit files on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const HISTORY: &str = r#"[
  {"hash": "h", "message": "tip", "parents": ["g"], "branches": ["main"]},
  {"hash": "g", "message": "merge feature", "parents": ["f", "e"]},
  {"hash": "e", "message": "feature work", "parents": ["c"], "branches": ["feature"]},
  {"hash": "f", "message": "main work", "parents": ["c"]},
  {"hash": "t", "message": "other tip", "parents": ["s"]},
  {"hash": "c", "message": "split", "parents": ["s"]},
  {"hash": "s", "message": "root", "parents": [], "tags": ["v0.1.0"]}
]"#;

fn lanes(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lanes"))
        .args(args)
        .output()
        .expect("Failed to execute lanes")
}

fn write_history(dir: &TempDir) -> String {
    let path = dir.path().join("commits.json");
    fs::write(&path, HISTORY).unwrap();
    path.to_string_lossy().to_string()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "lanes failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = lanes(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Commit graph lane layout"));
    assert!(stdout.contains("layout"));
    assert!(stdout.contains("frame"));
}

#[test]
fn test_layout_command() {
    let dir = TempDir::new().unwrap();
    let file = write_history(&dir);

    let graph = stdout_json(&lanes(&["layout", &file]));

    assert_eq!(graph["max_columns"], 3);
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 7);
    assert_eq!(graph["paths"].as_array().unwrap().len(), 3);
    assert_eq!(graph["commits"][6]["tags"], serde_json::json!(["v0.1.0"]));
    assert_eq!(graph["commits"][0]["branches"], serde_json::json!(["main"]));
    assert_eq!(
        graph["paths"][1]["vertices"],
        serde_json::json!([
            {"x": 0, "y": 1}, {"x": 1, "y": 2}, {"x": 1, "y": 4}, {"x": 0, "y": 5}
        ])
    );
}

#[test]
fn test_frame_command_uses_sibling_config() {
    let dir = TempDir::new().unwrap();
    let file = write_history(&dir);
    fs::write(
        dir.path().join("lanes.toml"),
        "[grid]\ncell_width = 10.0\ncell_height = 20.0\noffset_x = 5.0\noffset_y = 10.0\n\n[style]\npalette = [\"a\", \"b\"]\n",
    )
    .unwrap();

    let frame = stdout_json(&lanes(&["frame", &file, "--start", "4", "--rows", "2"]));

    assert_eq!(frame["window"], serde_json::json!({"start_row": 4, "row_count": 2}));
    assert_eq!(frame["width"], 40.0);
    assert_eq!(frame["height"], 40.0);
    let markers = frame["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 2);
    // Row 4 holds the unrelated tip in column 2 with path index 2.
    assert_eq!(markers[0]["x"], 25.0);
    assert_eq!(markers[0]["y"], 10.0);
    assert_eq!(markers[0]["color_index"], 0);
}

#[test]
fn test_frame_past_history_is_empty() {
    let dir = TempDir::new().unwrap();
    let file = write_history(&dir);

    let frame = stdout_json(&lanes(&["frame", &file, "--start", "50", "--rows", "5"]));
    assert_eq!(frame["segments"], serde_json::json!([]));
    assert_eq!(frame["markers"], serde_json::json!([]));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let file = write_history(&dir);
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[style]\npalette = []\n").unwrap();

    let output = lanes(&["frame", &file, "--config", &config.to_string_lossy()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("palette"));
}

#[test]
fn test_missing_commit_file_fails() {
    let output = lanes(&["layout", "/definitely/not/here.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot load commits"));
}

/// Test end-to-end layout through the library
#[test]
fn test_library_layout_matches_cli() {
    let dir = TempDir::new().unwrap();
    let file = write_history(&dir);

    let commits = lanes_core::load_commits(Path::new(&file)).unwrap();
    let graph = lanes_core::GraphBuilder::build(commits);
    let cli_graph = stdout_json(&lanes(&["layout", &file]));

    assert_eq!(serde_json::to_value(&graph).unwrap(), cli_graph);
}
