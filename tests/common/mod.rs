#![allow(dead_code)]

use grid_util::grid::ValueGrid;
use marker_pathfinding::{CellState, MarkerGrid, Point};

/// Distance from the nearest source to the nearest target cell that is not a source, computed by
/// relaxing every cell until nothing changes. Independent of the search under test.
pub fn reference_distance(
    grid: &MarkerGrid,
    sources: &[Point],
    target: CellState,
) -> Option<usize> {
    let w = grid.cols() as i32;
    let h = grid.rows() as i32;
    let ix = |p: Point| (p.y * w + p.x) as usize;
    let mut dist = vec![usize::MAX; (w * h) as usize];
    for s in sources {
        dist[ix(*s)] = 0;
    }
    let mut changed = true;
    while changed {
        changed = false;
        for y in 0..h {
            for x in 0..w {
                let p = Point::new(x, y);
                if grid.get_point(p).is_obstacle() || dist[ix(p)] == 0 {
                    continue;
                }
                let best = [(0, 1), (0, -1), (1, 0), (-1, 0)]
                    .iter()
                    .map(|(dx, dy)| Point::new(x + dx, y + dy))
                    .filter(|n| n.x >= 0 && n.y >= 0 && n.x < w && n.y < h)
                    .filter_map(|n| dist[ix(n)].checked_add(1))
                    .min();
                if let Some(d) = best {
                    if d < dist[ix(p)] {
                        dist[ix(p)] = d;
                        changed = true;
                    }
                }
            }
        }
    }
    grid.cells_with(target)
        .into_iter()
        .filter(|p| !sources.contains(p))
        .map(|p| dist[ix(p)])
        .filter(|d| *d != usize::MAX)
        .min()
}

/// Prints the grid with the sources marked, for failing cases.
pub fn visualize_grid(grid: &MarkerGrid, sources: &[Point]) {
    for y in 0..grid.rows() as i32 {
        let line = (0..grid.cols() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if sources.contains(&p) {
                    'o'
                } else {
                    grid.get_point(p).glyph()
                }
            })
            .collect::<String>();
        println!("{}", line);
    }
}
