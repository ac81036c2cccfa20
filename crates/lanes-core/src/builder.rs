//! Incremental lane assignment for commit histories
//!
//! Commits arrive one row at a time. Every parent edge that has not reached
//! its parent yet is an open lane; a lane owns one column until its parent
//! commit shows up. Lanes are scanned in creation order, and that order
//! decides which lane keeps its column when several converge on one commit.

use crate::graph::Graph;
use crate::model::*;

/// An open edge waiting for `next_commit_hash` to appear.
#[derive(Debug, Clone)]
struct Lane {
    next_commit_hash: String,
    column: usize,
    /// Index into `Graph::paths`.
    path: usize,
}

/// Number of nodes and path vertices placed in each column. The width of
/// the graph is the length of `counts`, which never ends in a zero.
#[derive(Debug, Default)]
struct ColumnUses {
    counts: Vec<usize>,
}

impl ColumnUses {
    fn add(&mut self, column: usize) {
        if column >= self.counts.len() {
            self.counts.resize(column + 1, 0);
        }
        self.counts[column] += 1;
    }

    fn remove(&mut self, column: usize) {
        if let Some(count) = self.counts.get_mut(column) {
            *count = count.saturating_sub(1);
        }
        while self.counts.last() == Some(&0) {
            self.counts.pop();
        }
    }

    fn width(&self) -> usize {
        self.counts.len()
    }
}

/// Builds a [`Graph`] commit by commit.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    lanes: Vec<Lane>,
    next_path_index: usize,
    column_uses: ColumnUses,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out a whole batch and return the finished graph.
    pub fn build<I>(commits: I) -> Graph
    where
        I: IntoIterator<Item = Commit>,
    {
        let mut builder = GraphBuilder::new();
        builder.add_commits(commits);
        builder.into_graph()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Number of lanes still waiting for a commit.
    pub fn active_lanes(&self) -> usize {
        self.lanes.len()
    }

    /// Hashes the open lanes are waiting for, in scan order.
    pub fn pending_hashes(&self) -> impl Iterator<Item = &str> {
        self.lanes.iter().map(|lane| lane.next_commit_hash.as_str())
    }

    /// Drop all layout state, ready for a fresh history.
    pub fn clear(&mut self) {
        self.graph = Graph::default();
        self.lanes.clear();
        self.next_path_index = 0;
        self.column_uses = ColumnUses::default();
    }

    /// Append each commit in order, exactly as repeated [`add_commit`] calls would.
    ///
    /// [`add_commit`]: GraphBuilder::add_commit
    pub fn add_commits<I>(&mut self, commits: I)
    where
        I: IntoIterator<Item = Commit>,
    {
        let first_row = self.graph.row_count();
        for commit in commits {
            self.add_commit(commit);
        }
        tracing::debug!(
            "Laid out rows {}..{} ({} open lanes, {} columns)",
            first_row,
            self.graph.row_count(),
            self.lanes.len(),
            self.graph.max_columns
        );
    }

    /// Lay out one commit at the next row.
    pub fn add_commit(&mut self, commit: Commit) {
        let row = self.graph.row_count();

        let matching: Vec<usize> = self
            .lanes
            .iter()
            .enumerate()
            .filter(|(_, lane)| lane.next_commit_hash == commit.hash)
            .map(|(idx, _)| idx)
            .collect();

        let mut retired = Vec::new();

        let (column, path_index) = match matching.split_first() {
            None => self.place_unclaimed(&commit, row),
            Some((&primary, joined)) => {
                let column = self.lanes[primary].column;
                for &lane_idx in joined {
                    self.join_lane(lane_idx, column, row);
                    retired.push(lane_idx);
                }
                let path_index = self.graph.paths[self.lanes[primary].path].path_index;
                match commit.parents.first() {
                    Some(first) => self.lanes[primary].next_commit_hash = first.clone(),
                    None => {
                        self.terminate_lane(primary, row);
                        retired.push(primary);
                    }
                }
                (column, path_index)
            }
        };

        tracing::trace!(
            "Commit {} at row {} column {} ({} lanes matched)",
            commit.hash,
            row,
            column,
            matching.len()
        );

        for parent in commit.parents.iter().skip(1) {
            self.fork_lane(parent, Point::new(column, row));
        }

        if !retired.is_empty() {
            let mut idx = 0;
            self.lanes.retain(|_| {
                let keep = !retired.contains(&idx);
                idx += 1;
                keep
            });
        }

        self.column_uses.add(column);
        self.graph.max_columns = self.column_uses.width();
        self.graph.nodes.push(Node {
            position: Point::new(column, row),
            path_index,
        });
        self.graph.commits.push(commit);
    }

    /// Place a commit no lane was waiting for. Returns its column and node index.
    fn place_unclaimed(&mut self, commit: &Commit, row: usize) -> (usize, usize) {
        let column = self.lowest_free_column();
        let path_index = self.reserve_path_index();

        if let Some(first) = commit.parents.first() {
            self.column_uses.add(column);
            let path = self.push_path(Path::starting_at(path_index, Point::new(column, row)));
            self.lanes.push(Lane {
                next_commit_hash: first.clone(),
                column,
                path,
            });
        }

        (column, path_index)
    }

    /// Open a lane for a non-first parent. The path leaves the commit at
    /// `origin` and bends into its own column on the next row.
    fn fork_lane(&mut self, parent: &str, origin: Point) {
        let column = self.lowest_free_column();
        let path_index = self.reserve_path_index();

        let mut path = Path::starting_at(path_index, origin);
        self.column_uses.add(origin.x);
        extend_path(&mut path, &mut self.column_uses, Point::new(column, origin.y + 1));
        let path = self.push_path(path);

        self.lanes.push(Lane {
            next_commit_hash: parent.to_string(),
            column,
            path,
        });
    }

    /// Bend a converging lane into `column` at `row` and close its path.
    fn join_lane(&mut self, lane_idx: usize, column: usize, row: usize) {
        let lane = &self.lanes[lane_idx];
        let path = &mut self.graph.paths[lane.path];
        tracing::debug!(
            "Joining lane {} (column {}) into column {} at row {}",
            path.path_index,
            lane.column,
            column,
            row
        );

        extend_path(path, &mut self.column_uses, Point::new(column, row));
        path.is_complete = true;
    }

    /// Close the lane of an orphan commit at its row.
    fn terminate_lane(&mut self, lane_idx: usize, row: usize) {
        let lane = &self.lanes[lane_idx];
        let path = &mut self.graph.paths[lane.path];
        extend_path(path, &mut self.column_uses, Point::new(lane.column, row));
        path.is_complete = true;
    }

    fn push_path(&mut self, path: Path) -> usize {
        self.graph.paths.push(path);
        self.graph.paths.len() - 1
    }

    fn reserve_path_index(&mut self) -> usize {
        let index = self.next_path_index;
        self.next_path_index += 1;
        index
    }

    /// Columns stay with their lane until it closes; the lowest unused one is
    /// handed out next. With no gaps this is the open lane count.
    fn lowest_free_column(&self) -> usize {
        (0..=self.lanes.len())
            .find(|&column| self.lanes.iter().all(|lane| lane.column != column))
            .unwrap_or(self.lanes.len())
    }
}

/// Append `to` to a path, inserting a vertex at `(old column, to.y - 1)` when
/// the column changes more than one row below the last vertex. A bend vertex
/// on the same row as `to` is replaced. Every vertex added or dropped is
/// counted in `uses`.
fn extend_path(path: &mut Path, uses: &mut ColumnUses, to: Point) {
    if path.vertices.len() > 1 && path.last_vertex().is_some_and(|last| last.y == to.y) {
        if let Some(bend) = path.vertices.pop() {
            uses.remove(bend.x);
        }
    }

    if let Some(last) = path.last_vertex() {
        if last == to {
            return;
        }
        if last.x != to.x && to.y > last.y + 1 {
            path.vertices.push(Point::new(last.x, to.y - 1));
            uses.add(last.x);
        }
    }

    path.vertices.push(to);
    uses.add(to.x);
}
