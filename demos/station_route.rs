use marker_pathfinding::{
    Layout, NamedPattern, PatternCompositor, RoutePlanner, RouteRequest, TrackPattern, COLS,
};
use marker_pathfinding_patterns::{load_pattern, pattern_names};

// Routes between two station frames on the full 24x451 layout, through a drop-off column given
// as the first argument (default: the middle column).

fn named(name: &str) -> NamedPattern {
    let cells = load_pattern(name);
    NamedPattern::from_colored_cells(name, cells.iter().map(|(p, c)| (*p, c.as_str())))
        .expect("Pattern table uses an unknown colour")
}

fn main() {
    env_logger::init();
    let pivot_col = std::env::args()
        .nth(1)
        .and_then(|a| a.parse::<i32>().ok())
        .unwrap_or(COLS as i32 / 2);
    let library = pattern_names()
        .into_iter()
        .filter(|n| n != "track")
        .map(|n| named(&n))
        .collect();
    let planner = RoutePlanner::new(
        PatternCompositor::new(Layout::default(), library),
        TrackPattern::new(named("track")),
    );
    let request = RouteRequest::new("ichikawa", "motoyawata", pivot_col);
    match planner.compute(&request) {
        Ok(route) => {
            println!("{}", route.grid);
            println!("Steps from the start pattern to the drop-off: {}", route.steps_to_pivot);
            println!("Steps from the drop-off to the end pattern: {}", route.steps_from_pivot);
        }
        Err(e) => println!("{}", e.message()),
    }
}
