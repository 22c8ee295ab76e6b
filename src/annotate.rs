use crate::cell_state::CellState;
use crate::marker_grid::MarkerGrid;
use crate::step_count;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;

/// Cells a path overlay never replaces.
fn is_marker(state: CellState) -> bool {
    matches!(
        state,
        CellState::StartMarker | CellState::EndMarker | CellState::Pivot
    )
}

/// Marks both legs of a route on a copy of `grid` and returns it with the step count of each
/// leg. Marker and pivot cells keep their state, so overlaying the same legs again changes
/// nothing.
///
/// # Panics
/// If either leg is empty or leaves the grid.
pub fn overlay(
    grid: &MarkerGrid,
    path_to_pivot: &[Point],
    path_from_pivot: &[Point],
) -> (MarkerGrid, usize, usize) {
    let mut annotated = grid.clone();
    for leg in [path_to_pivot, path_from_pivot] {
        assert!(!leg.is_empty(), "cannot overlay an empty path");
        for &p in leg {
            assert!(
                annotated.point_in_bounds(p),
                "path cell {} lies outside the {}x{} grid",
                p,
                annotated.rows(),
                annotated.cols()
            );
            if !is_marker(annotated.get_point(p)) {
                annotated.set_point(p, CellState::PathOverlay);
            }
        }
    }
    annotated.update();
    (
        annotated,
        step_count(path_to_pivot),
        step_count(path_from_pivot),
    )
}
