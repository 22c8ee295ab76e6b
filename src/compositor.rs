use crate::cell_state::CellState;
use crate::error::ConfigError;
use crate::marker_grid::MarkerGrid;
use crate::pattern::{NamedPattern, PatternLibrary, TrackPattern};
use crate::{COLS, ROWS};
use log::{debug, warn};

/// Fixed grid dimensions shared by every build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Layout {
    fn default() -> Layout {
        Layout {
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl Layout {
    pub fn new(rows: usize, cols: usize) -> Layout {
        Layout { rows, cols }
    }

    /// Checks that `col` names a column of the bottom row.
    pub fn check_pivot(&self, col: i32) -> Result<(), ConfigError> {
        if col >= 0 && (col as usize) < self.cols {
            Ok(())
        } else {
            Err(ConfigError::PivotOutOfRange {
                col,
                cols: self.cols,
            })
        }
    }
}

/// Builds grids from the track pattern and the start and end frames chosen from a
/// [PatternLibrary]. Every build starts from an empty grid, so no state carries over.
#[derive(Clone, Debug, Default)]
pub struct PatternCompositor {
    pub layout: Layout,
    pub library: PatternLibrary,
}

impl PatternCompositor {
    pub fn new(layout: Layout, library: PatternLibrary) -> PatternCompositor {
        PatternCompositor { layout, library }
    }

    /// Composites a grid. Order matters, later stamps overwrite earlier ones: the replicated
    /// track, then every start frame cell as [CellState::StartMarker], then every end frame cell
    /// as [CellState::EndMarker], then the pivot on the bottom row. A pivot column outside the
    /// grid is dropped and the grid is returned without a pivot.
    pub fn build(
        &self,
        track: &TrackPattern,
        start_id: &str,
        end_id: &str,
        pivot_col: i32,
    ) -> Result<MarkerGrid, ConfigError> {
        let start = self.library.get(start_id)?;
        let end = self.library.get(end_id)?;

        let mut grid = MarkerGrid::empty(self.layout.rows, self.layout.cols);
        let clipped = track
            .replicated()
            .filter(|&(p, state)| !grid.stamp_clipped(p, state))
            .count();
        debug!(
            "Stamped track `{}` {} times, {} cells clipped",
            track.pattern.id, track.repeats, clipped
        );

        stamp_role(&mut grid, start, CellState::StartMarker)?;
        stamp_role(&mut grid, end, CellState::EndMarker)?;

        if !grid.place_pivot(pivot_col) {
            warn!(
                "Pivot column {} is outside 0..{}, building without a pivot",
                pivot_col, self.layout.cols
            );
        }
        grid.update();
        Ok(grid)
    }
}

/// Stamps every cell of `pattern` as `role`, ignoring the states stored in the pattern.
fn stamp_role(
    grid: &mut MarkerGrid,
    pattern: &NamedPattern,
    role: CellState,
) -> Result<(), ConfigError> {
    for p in pattern.points() {
        grid.stamp(p, role)
            .map_err(|source| ConfigError::PatternOutsideGrid {
                id: pattern.id.clone(),
                source,
            })?;
    }
    debug!("Stamped `{}` as {} ({} cells)", pattern.id, role, pattern.len());
    Ok(())
}
