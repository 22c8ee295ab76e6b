//! # marker_pathfinding
//!
//! Shortest routes on a fixed-size grid from a start marker region, through a single pivot
//! cell on the bottom row, to an end marker region. The grid is composited from a track
//! pattern repeated across the width and two selectable frame patterns; the routes are found
//! with a multi-source [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search)
//! over the 4-neighbourhood, stepping around obstacle cells. Connected components of the
//! traversable cells are kept up to date so that searches without a reachable target return
//! without flood filling.
//!
//! Coordinates are [Point]s with `x` as the column and `y` as the row; [cell] builds one in
//! (row, col) order.
pub mod annotate;
pub mod cell_state;
pub mod compositor;
pub mod error;
pub mod marker_grid;
pub mod pattern;
pub mod route;
pub mod search;

pub use annotate::overlay;
pub use cell_state::{CellState, DisplayColor};
pub use compositor::{Layout, PatternCompositor};
pub use error::{ConfigError, GridError, PathNotFound, RouteError};
pub use grid_util::point::Point;
pub use marker_grid::{cell, MarkerGrid};
pub use pattern::{NamedPattern, PatternLibrary, TrackPattern};
pub use route::{route_on, Route, RoutePlanner, RouteRequest};
pub use search::shortest_path;

/// Default number of grid rows.
pub const ROWS: usize = 24;
/// Default number of grid columns.
pub const COLS: usize = 451;
/// Column distance between two repetitions of the track pattern.
pub const TRACK_STRIDE: i32 = 41;
pub const TRACK_REPEATS: usize = 11;

/// (row, col) offsets of the neighbours a search expands, in expansion order: up, down, left,
/// right.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Number of moves along a path, one less than its number of cells.
pub fn step_count(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that consecutive cells of `path` are 4-neighbours.
pub fn is_connected(path: &[Point]) -> bool {
    path.windows(2).all(|w| {
        matches!(
            (w[0].x.abs_diff(w[1].x), w[0].y.abs_diff(w[1].y)),
            (0, 1) | (1, 0)
        )
    })
}
