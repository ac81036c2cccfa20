//! Lanes Core: commit graph layout and draw geometry

pub mod model;
pub mod graph;
pub mod builder;
pub mod geometry;
pub mod config;
pub mod io;
pub mod error;


#[cfg(test)]
pub mod test_utils;

pub use model::{Author, Commit, Point, Path, Node};
pub use graph::Graph;
pub use builder::GraphBuilder;
pub use geometry::{GridConfig, Style, RowWindow, PixelPoint, DrawCommand, NodeMarker, PathSegment, Frame, color_index, position_of, position_in_window, path_segment, node_marker, frame};
pub use config::{CONFIG_FILE, LanesConfig};
pub use io::{load_commits, parse_commits};
pub use error::{LanesError, Result};
