//! Multi-source breadth-first search over the 4-neighbourhood of a [MarkerGrid].
//!
//! Visited cells and their predecessors live in a single insertion-ordered map, so the
//! frontier only has to carry map indices and the path is reconstructed once, when a target
//! is dequeued.
use crate::cell_state::CellState;
use crate::marker_grid::MarkerGrid;
use fxhash::FxBuildHasher;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::{info, warn};
use std::collections::VecDeque;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the search roots.
const ROOT: usize = usize::MAX;

fn reverse_path(parents: &FxIndexMap<Point, usize>, start: usize) -> Vec<Point> {
    let mut path: Vec<Point> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, &parent)| {
            *i = parent;
            *node
        })
    })
    .collect();
    path.reverse();
    path
}

/// Finds a shortest 4-connected path from any of `sources` to a cell in `target` state,
/// stepping around [CellState::Obstacle] cells. The path starts at a source and ends at the
/// first target cell reached, both included. A source is never its own match: a target
/// counts only once at least one step has been taken, so sources already in `target` state
/// make the search look for a different one.
///
/// Ties between equally short paths are broken by source order, then by the neighbour order
/// in [NEIGHBOUR_OFFSETS](crate::NEIGHBOUR_OFFSETS).
///
/// Returns [None] if there are no sources or no qualifying target can be reached. When the
/// grid's components are up to date this is decided without searching.
///
/// # Panics
/// If a source lies outside the grid.
pub fn shortest_path(
    grid: &MarkerGrid,
    sources: &[Point],
    target: CellState,
) -> Option<Vec<Point>> {
    if sources.is_empty() {
        info!("No sources to search for {} from", target);
        return None;
    }
    for source in sources {
        assert!(
            grid.point_in_bounds(*source),
            "source {} lies outside the {}x{} grid",
            source,
            grid.rows(),
            grid.cols()
        );
    }
    if !grid.components_dirty && !grid.any_target_reachable(sources, target) {
        info!("No {} cell is reachable from {} sources", target, sources.len());
        return None;
    }

    let mut parents: FxIndexMap<Point, usize> = FxIndexMap::default();
    let mut to_see = VecDeque::new();
    for source in sources {
        if let Vacant(e) = parents.entry(*source) {
            to_see.push_back(e.index());
            e.insert(ROOT);
        }
    }
    while let Some(index) = to_see.pop_front() {
        let Some((&node, &parent)) = parents.get_index(index) else {
            continue;
        };
        if parent != ROOT && grid.get_point(node) == target {
            return Some(reverse_path(&parents, index));
        }
        for neighbour in grid.neighbours(node) {
            if grid.get_point(neighbour).is_obstacle() {
                continue;
            }
            if let Vacant(e) = parents.entry(neighbour) {
                to_see.push_back(e.index());
                e.insert(index);
            }
        }
    }
    if !grid.components_dirty {
        warn!(
            "Reachable {} cell could not be pathed to, are the components correct?",
            target
        );
    }
    None
}
