//! Mapping from graph space to pixel-space draw commands
//!
//! Everything here is a pure function of a graph snapshot, a row window and
//! the grid/style settings. Renderers (canvas, SVG, terminal) replay the
//! returned commands on their own surface.

use crate::graph::Graph;
use crate::model::{Node, Path, Point};
use serde::{Deserialize, Serialize};

/// Cell size and padding of the layout grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_width: f32,
    pub cell_height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: 16.0,
            cell_height: 24.0,
            offset_x: 8.0,
            offset_y: 12.0,
        }
    }
}

/// Visual settings shared by every path and node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Color identifiers, picked by `path_index % palette.len()`.
    pub palette: Vec<String>,
    pub node_radius: f32,
    pub line_width: f32,
    /// How far bezier control points reach, as a fraction of a row (0..=1).
    pub curve_smoothness: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            palette: [
                "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
                "#17becf",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            node_radius: 4.0,
            line_width: 2.0,
            curve_smoothness: 0.5,
        }
    }
}

impl Style {
    /// Palette entry for a path.
    ///
    /// # Panics
    ///
    /// Panics if the palette is empty.
    pub fn color_for(&self, path_index: usize) -> &str {
        &self.palette[color_index(path_index, self.palette.len())]
    }
}

/// Rows `[start_row, start_row + row_count)` currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RowWindow {
    pub start_row: usize,
    pub row_count: usize,
}

impl RowWindow {
    pub const fn new(start_row: usize, row_count: usize) -> Self {
        RowWindow {
            start_row,
            row_count,
        }
    }

    /// Window covering every row of a graph.
    pub fn all(graph: &Graph) -> Self {
        RowWindow::new(0, graph.row_count())
    }

    pub fn end_row(&self) -> usize {
        self.start_row.saturating_add(self.row_count)
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.start_row && row < self.end_row()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Shrink the window so it never reaches past `row_limit`.
    pub fn clamped_to(&self, row_limit: usize) -> Self {
        let start_row = self.start_row.min(row_limit);
        RowWindow {
            start_row,
            row_count: self.row_count.min(row_limit - start_row),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        PixelPoint { x, y }
    }
}

/// One step of a path outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    MoveTo { to: PixelPoint },
    LineTo { to: PixelPoint },
    CubicTo {
        control1: PixelPoint,
        control2: PixelPoint,
        to: PixelPoint,
    },
}

/// A commit marker ready to paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeMarker {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color_index: usize,
}

/// Drawable outline of one path inside a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub path_index: usize,
    pub color_index: usize,
    pub commands: Vec<DrawCommand>,
}

/// Everything a renderer needs to paint one window of a graph.
///
/// Draw commands are not clipped: lines entering from rows above the window
/// start at negative `y`, and open lanes or a fork leaving the last row end
/// below `height`. Renderers clip to the `width` x `height` surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub window: RowWindow,
    pub width: f32,
    pub height: f32,
    pub line_width: f32,
    pub segments: Vec<PathSegment>,
    pub markers: Vec<NodeMarker>,
}

/// Map a palette size onto a path's color slot.
///
/// # Panics
///
/// Panics if `palette_len` is zero.
pub fn color_index(path_index: usize, palette_len: usize) -> usize {
    assert!(palette_len > 0, "palette must contain at least one color");
    path_index % palette_len
}

/// Absolute pixel position of a grid point.
pub fn position_of(point: Point, grid: &GridConfig) -> PixelPoint {
    PixelPoint::new(
        point.x as f32 * grid.cell_width + grid.offset_x,
        point.y as f32 * grid.cell_height + grid.offset_y,
    )
}

/// Pixel position relative to a window starting at `start_row`. Rows above
/// the window map to negative `y`.
pub fn position_in_window(point: Point, start_row: usize, grid: &GridConfig) -> PixelPoint {
    PixelPoint::new(
        point.x as f32 * grid.cell_width + grid.offset_x,
        (point.y as f32 - start_row as f32) * grid.cell_height + grid.offset_y,
    )
}

/// Draw commands for the part of `path` that touches `window`, in
/// window-relative coordinates.
///
/// Returns `None` when the path lies entirely above or below the window.
/// Open paths are extended straight down to the window's bottom edge.
pub fn path_segment(
    path: &Path,
    window: RowWindow,
    grid: &GridConfig,
    curve_smoothness: f32,
) -> Option<Vec<DrawCommand>> {
    if window.is_empty() {
        return None;
    }
    let first = path.first_vertex()?;
    let last = path.last_vertex()?;
    let end_row = window.end_row();

    if first.y >= end_row || (path.is_complete && last.y < window.start_row) {
        return None;
    }

    let bend = grid.cell_height * curve_smoothness.clamp(0.0, 1.0);
    let pixel = |point: Point| position_in_window(point, window.start_row, grid);
    let mut commands = Vec::new();

    for pair in path.vertices.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if to.y < window.start_row || from.y >= end_row {
            continue;
        }
        if commands.is_empty() {
            commands.push(DrawCommand::MoveTo { to: pixel(from) });
        }

        let (start, end) = (pixel(from), pixel(to));
        if from.x == to.x {
            commands.push(DrawCommand::LineTo { to: end });
        } else {
            commands.push(DrawCommand::CubicTo {
                control1: PixelPoint::new(start.x, start.y + bend),
                control2: PixelPoint::new(end.x, end.y - bend),
                to: end,
            });
        }
    }

    if path.is_complete {
        if commands.is_empty() {
            // A lone vertex inside the window.
            let inside = path.vertices.iter().find(|v| window.contains(v.y))?;
            commands.push(DrawCommand::MoveTo { to: pixel(*inside) });
        }
    } else if last.y < end_row {
        if commands.is_empty() {
            commands.push(DrawCommand::MoveTo { to: pixel(last) });
        }
        commands.push(DrawCommand::LineTo {
            to: pixel(Point::new(last.x, end_row)),
        });
    }

    Some(commands)
}

/// Marker for a node, or `None` when its row is outside the window.
pub fn node_marker(
    node: &Node,
    window: RowWindow,
    grid: &GridConfig,
    style: &Style,
) -> Option<NodeMarker> {
    if !window.contains(node.position.y) {
        return None;
    }
    let center = position_in_window(node.position, window.start_row, grid);
    Some(NodeMarker {
        x: center.x,
        y: center.y,
        radius: style.node_radius,
        color_index: color_index(node.path_index, style.palette.len()),
    })
}

/// Collect every visible path and node for a window. The window is clamped
/// to the rows laid out so far, so windows past the end yield an empty frame.
pub fn frame(graph: &Graph, window: RowWindow, grid: &GridConfig, style: &Style) -> Frame {
    let window = window.clamped_to(graph.row_count());
    let palette_len = style.palette.len();

    let segments = graph
        .paths()
        .iter()
        .filter_map(|path| {
            let commands = path_segment(path, window, grid, style.curve_smoothness)?;
            Some(PathSegment {
                path_index: path.path_index,
                color_index: color_index(path.path_index, palette_len),
                commands,
            })
        })
        .collect();

    let markers = graph.nodes()[window.start_row..window.end_row()]
        .iter()
        .filter_map(|node| node_marker(node, window, grid, style))
        .collect();

    Frame {
        window,
        width: graph.max_columns() as f32 * grid.cell_width + 2.0 * grid.offset_x,
        height: window.row_count as f32 * grid.cell_height,
        line_width: style.line_width,
        segments,
        markers,
    }
}
