use marker_pathfinding::{cell, route_on, CellState, MarkerGrid};

// In this example a route is found on a 4x5 grid with shape
//  _____
// |S.#..|
// |..#.E|
// |.....|
// |...P.|
//  _____
// where
// - # marks an obstacle
// - S marks the start marker
// - E marks the end marker
// - P marks the pivot
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let mut grid = MarkerGrid::empty(4, 5);
    grid.stamp(cell(0, 0), CellState::StartMarker).unwrap();
    grid.stamp(cell(0, 2), CellState::Obstacle).unwrap();
    grid.stamp(cell(1, 2), CellState::Obstacle).unwrap();
    grid.stamp(cell(1, 4), CellState::EndMarker).unwrap();
    grid.place_pivot(3);
    grid.update();
    println!("{}", grid);
    match route_on(&grid) {
        Ok(route) => {
            println!("{}", route.grid);
            println!("Steps to pivot: {}", route.steps_to_pivot);
            println!("Steps from pivot: {}", route.steps_from_pivot);
        }
        Err(e) => println!("{}", e),
    }
}
