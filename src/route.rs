use crate::annotate::overlay;
use crate::cell_state::CellState;
use crate::compositor::PatternCompositor;
use crate::error::{ConfigError, PathNotFound, RouteError};
use crate::marker_grid::MarkerGrid;
use crate::pattern::TrackPattern;
use crate::search::shortest_path;
use grid_util::point::Point;
use log::info;

/// The current selection: which frames mark the start and the end, and the pivot column on the
/// bottom row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RouteRequest {
    pub start_pattern: String,
    pub end_pattern: String,
    pub pivot_col: i32,
}

impl RouteRequest {
    pub fn new(
        start_pattern: impl Into<String>,
        end_pattern: impl Into<String>,
        pivot_col: i32,
    ) -> RouteRequest {
        RouteRequest {
            start_pattern: start_pattern.into(),
            end_pattern: end_pattern.into(),
            pivot_col,
        }
    }
}

/// Both legs of a computed route, overlaid on the grid they were found on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub grid: MarkerGrid,
    pub path_to_pivot: Vec<Point>,
    pub path_from_pivot: Vec<Point>,
    pub steps_to_pivot: usize,
    pub steps_from_pivot: usize,
}

/// Finds the route start markers -> pivot -> end markers on an already built grid and overlays
/// it. Both searches run on the same grid, which stays borrowed for the whole call.
pub fn route_on(grid: &MarkerGrid) -> Result<Route, PathNotFound> {
    let starts = grid.cells_with(CellState::StartMarker);
    if starts.is_empty() {
        info!("No start markers on the grid");
        return Err(PathNotFound::NoStartMarkers);
    }
    let pivot = grid.pivot().ok_or(PathNotFound::NoPivot)?;
    let path_to_pivot =
        shortest_path(grid, &starts, CellState::Pivot).ok_or(PathNotFound::PivotUnreachable)?;
    let path_from_pivot =
        shortest_path(grid, &[pivot], CellState::EndMarker).ok_or(PathNotFound::EndUnreachable)?;
    let (annotated, steps_to_pivot, steps_from_pivot) =
        overlay(grid, &path_to_pivot, &path_from_pivot);
    info!(
        "Route via pivot {}: {} steps to the pivot, {} steps from it",
        pivot, steps_to_pivot, steps_from_pivot
    );
    Ok(Route {
        grid: annotated,
        path_to_pivot,
        path_from_pivot,
        steps_to_pivot,
        steps_from_pivot,
    })
}

/// Runs the compute action: composite a grid for a [RouteRequest], then route on it.
#[derive(Clone, Debug)]
pub struct RoutePlanner {
    pub compositor: PatternCompositor,
    pub track: TrackPattern,
}

impl RoutePlanner {
    pub fn new(compositor: PatternCompositor, track: TrackPattern) -> RoutePlanner {
        RoutePlanner { compositor, track }
    }

    /// The grid for `request` as it is shown before computing. An out-of-range pivot column
    /// leaves the grid without a pivot instead of failing.
    pub fn build_grid(&self, request: &RouteRequest) -> Result<MarkerGrid, ConfigError> {
        self.compositor.build(
            &self.track,
            &request.start_pattern,
            &request.end_pattern,
            request.pivot_col,
        )
    }

    /// Validates `request`, builds a fresh grid and routes on it.
    pub fn compute(&self, request: &RouteRequest) -> Result<Route, RouteError> {
        self.compositor.layout.check_pivot(request.pivot_col)?;
        let grid = self.build_grid(request)?;
        Ok(self.route(&grid)?)
    }

    /// Routes on a grid built elsewhere.
    ///
    /// # Panics
    /// If `grid` does not have this planner's layout.
    pub fn route(&self, grid: &MarkerGrid) -> Result<Route, PathNotFound> {
        let layout = self.compositor.layout;
        assert_eq!(
            (grid.rows(), grid.cols()),
            (layout.rows, layout.cols),
            "grid does not match the planner layout"
        );
        route_on(grid)
    }
}
