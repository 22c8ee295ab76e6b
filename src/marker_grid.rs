use crate::cell_state::{CellState, DisplayColor};
use crate::error::GridError;
use crate::NEIGHBOUR_OFFSETS;
use core::fmt;
use fxhash::FxHashSet;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use itertools::iproduct;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [MarkerGrid] stores one [CellState] per cell in row-major order. Besides the raw states it
/// maintains the connected components of traversable cells using a [UnionFind] structure, so a
/// search can tell up front whether any target is reachable at all.
/// Implements [ValueGrid] with `x` as the column and `y` as the row.
#[derive(Clone, Debug)]
pub struct MarkerGrid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for MarkerGrid {
    fn default() -> MarkerGrid {
        MarkerGrid::empty(0, 0)
    }
}

impl PartialEq for MarkerGrid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for MarkerGrid {}

impl MarkerGrid {
    /// A `rows` x `cols` grid with every cell [CellState::Empty].
    pub fn empty(rows: usize, cols: usize) -> MarkerGrid {
        MarkerGrid::new(cols, rows, CellState::Empty)
    }
    pub fn rows(&self) -> usize {
        self.height
    }
    pub fn cols(&self) -> usize {
        self.width
    }
    fn ix(&self, point: Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }
    pub fn can_move_to(&self, point: Point) -> bool {
        self.point_in_bounds(point) && !self.get_point(point).is_obstacle()
    }

    /// In-bounds 4-neighbours of `point`, in [NEIGHBOUR_OFFSETS] order.
    pub fn neighbours(&self, point: Point) -> SmallVec<[Point; 4]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(d_row, d_col)| Point::new(point.x + d_col, point.y + d_row))
            .filter(|p| self.point_in_bounds(*p))
            .collect()
    }

    /// Writes `state` at `point`, rejecting coordinates outside the grid.
    pub fn stamp(&mut self, point: Point, state: CellState) -> Result<(), GridError> {
        if !self.point_in_bounds(point) {
            return Err(GridError::OutOfBounds {
                row: point.y,
                col: point.x,
                rows: self.height,
                cols: self.width,
            });
        }
        self.set_point(point, state);
        Ok(())
    }

    /// Writes `state` at `point` if it lies on the grid and silently drops it otherwise.
    /// Returns whether the cell was written.
    pub fn stamp_clipped(&mut self, point: Point, state: CellState) -> bool {
        self.stamp(point, state).is_ok()
    }

    /// All cells currently in `state`, in row-major order.
    pub fn cells_with(&self, state: CellState) -> Vec<Point> {
        iproduct!(0..self.height as i32, 0..self.width as i32)
            .map(|(y, x)| Point::new(x, y))
            .filter(|p| self.get_point(*p) == state)
            .collect()
    }
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|s| **s == state).count()
    }
    pub fn pivot(&self) -> Option<Point> {
        self.cells_with(CellState::Pivot).into_iter().next()
    }

    /// Moves the pivot to column `col` of the bottom row. The previous pivot, if any, reverts to
    /// [CellState::Empty]. Returns false and leaves the grid without a pivot if `col` is out of
    /// range.
    pub fn place_pivot(&mut self, col: i32) -> bool {
        for p in self.cells_with(CellState::Pivot) {
            self.set_point(p, CellState::Empty);
        }
        let bottom = self.height as i32 - 1;
        self.height > 0 && self.stamp_clipped(Point::new(col, bottom), CellState::Pivot)
    }

    /// The display colours of the grid, one row per grid row.
    pub fn to_colors(&self) -> Vec<Vec<DisplayColor>> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|s| s.display_color()).collect())
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: Point) -> usize {
        self.components.find(self.ix(point))
    }

    /// Checks whether a search from `sources` could reach a cell in `target` state other than a
    /// source itself. Only meaningful while the components are up to date.
    pub fn any_target_reachable(&self, sources: &[Point], target: CellState) -> bool {
        if target.is_obstacle() {
            return false;
        }
        let source_set = sources.iter().copied().collect::<FxHashSet<Point>>();
        // Sources expand even when they are obstacles themselves, so their neighbours count too.
        let source_components = sources
            .iter()
            .flat_map(|s| std::iter::once(*s).chain(self.neighbours(*s)))
            .filter(|p| self.can_move_to(*p))
            .map(|p| self.get_component(p))
            .collect::<FxHashSet<usize>>();
        self.cells_with(target).into_iter().any(|p| {
            !source_set.contains(&p) && source_components.contains(&self.get_component(p))
        })
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up traversable 4-neighbours.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for (y, x) in iproduct!(0..self.height as i32, 0..self.width as i32) {
            let point = Point::new(x, y);
            if !self.can_move_to(point) {
                continue;
            }
            let parent_ix = self.ix(point);
            for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(p) {
                    let ix = self.ix(p);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for MarkerGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line = row.iter().map(|s| s.glyph()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl ValueGrid<CellState> for MarkerGrid {
    fn new(width: usize, height: usize, default_value: CellState) -> Self {
        let mut base_grid = MarkerGrid {
            cells: vec![default_value; width * height],
            width,
            height,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        base_grid.generate_components();
        base_grid
    }
    fn get(&self, x: i32, y: i32) -> CellState {
        self.cells[self.ix(Point::new(x, y))]
    }
    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// they are (potentially) broken apart by a new obstacle.
    fn set(&mut self, x: i32, y: i32, value: CellState) {
        let p = Point::new(x, y);
        let p_ix = self.ix(p);
        let was_blocked = self.cells[p_ix].is_obstacle();
        self.cells[p_ix] = value;
        if value.is_obstacle() {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            for n in self.neighbours(p) {
                if self.can_move_to(n) {
                    let n_ix = self.ix(n);
                    self.components.union(p_ix, n_ix);
                }
            }
        }
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}

/// Builds a [Point] from (row, col) order.
pub fn cell(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = MarkerGrid::empty(24, 451);
        assert_eq!(grid.rows(), 24);
        assert_eq!(grid.cols(), 451);
        assert_eq!(grid.count(CellState::Empty), 24 * 451);
        assert!(grid.pivot().is_none());
    }

    #[test]
    fn stamp_rejects_out_of_bounds() {
        let mut grid = MarkerGrid::empty(3, 4);
        assert_eq!(
            grid.stamp(cell(3, 0), CellState::Obstacle),
            Err(GridError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 4
            })
        );
        assert!(grid.stamp(cell(0, -1), CellState::Obstacle).is_err());
        assert!(!grid.stamp_clipped(cell(0, 4), CellState::Obstacle));
        assert_eq!(grid.count(CellState::Empty), 12);

        grid.stamp(cell(2, 3), CellState::Obstacle).unwrap();
        assert_eq!(grid.get_point(cell(2, 3)), CellState::Obstacle);
        assert_eq!(grid.count(CellState::Empty), 11);
    }

    #[test]
    fn pivot_stays_unique() {
        let mut grid = MarkerGrid::empty(3, 5);
        assert!(grid.place_pivot(1));
        assert!(grid.place_pivot(4));
        assert_eq!(grid.cells_with(CellState::Pivot), vec![cell(2, 4)]);
        assert_eq!(grid.get_point(cell(2, 1)), CellState::Empty);
        assert!(!grid.place_pivot(5));
        assert_eq!(grid.pivot(), None);
    }

    #[test]
    fn cells_are_listed_row_major() {
        let mut grid = MarkerGrid::empty(2, 3);
        grid.stamp(cell(1, 0), CellState::StartMarker).unwrap();
        grid.stamp(cell(0, 2), CellState::StartMarker).unwrap();
        assert_eq!(
            grid.cells_with(CellState::StartMarker),
            vec![cell(0, 2), cell(1, 0)]
        );
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        let mut grid = MarkerGrid::empty(2, 3);
        grid.stamp(cell(0, 1), CellState::Obstacle).unwrap();
        grid.stamp(cell(1, 1), CellState::Obstacle).unwrap();
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        let left = grid.get_component(cell(0, 0));
        assert_eq!(left, grid.get_component(cell(1, 0)));
        assert_ne!(left, grid.get_component(cell(0, 2)));
    }

    #[test]
    fn reachability_ignores_source_cells() {
        // |S#E|
        let mut grid = MarkerGrid::empty(1, 3);
        grid.stamp(cell(0, 0), CellState::StartMarker).unwrap();
        grid.stamp(cell(0, 1), CellState::Obstacle).unwrap();
        grid.stamp(cell(0, 2), CellState::EndMarker).unwrap();
        grid.update();
        let start = [cell(0, 0)];
        assert!(!grid.any_target_reachable(&start, CellState::EndMarker));
        assert!(!grid.any_target_reachable(&start, CellState::StartMarker));
        assert!(!grid.any_target_reachable(&start, CellState::Obstacle));
        // An obstacle source still expands into its neighbours.
        assert!(grid.any_target_reachable(&[cell(0, 1)], CellState::EndMarker));
    }

    #[test]
    fn display_uses_glyphs() {
        let mut grid = MarkerGrid::empty(2, 3);
        grid.stamp(cell(0, 0), CellState::StartMarker).unwrap();
        grid.stamp(cell(0, 1), CellState::Obstacle).unwrap();
        grid.place_pivot(2);
        assert_eq!(grid.to_string(), "S#.\n..P\n");
        assert_eq!(grid.to_colors()[1][2], DisplayColor::Pivot);
    }
}
