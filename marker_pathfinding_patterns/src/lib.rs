use csv::ReaderBuilder;
use grid_util::point::Point;
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory holding the `<name>.csv` pattern tables shipped with the workspace.
pub const PATTERN_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../patterns");

/// One line of a pattern table: `span` cells of `color`, starting at (`row`, `col`) and running
/// to the right.
#[derive(Debug, Deserialize)]
pub struct PatternRecord {
    row: i32,
    col: i32,
    span: u32,
    color: String,
}

impl PatternRecord {
    /// Cells whose column would not fit an `i32` are dropped.
    fn cells(&self) -> impl Iterator<Item = (Point, String)> + '_ {
        (0..self.span)
            .map_while(|i| i32::try_from(i).ok())
            .map_while(move |i| self.col.checked_add(i))
            .map(move |x| (Point::new(x, self.row), self.color.clone()))
    }
}

fn table_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.csv", name))
}

/// Reads the table at `path` into colour-tagged cells, in file order.
pub fn load_table(path: &Path) -> Vec<(Point, String)> {
    let file = File::open(path).expect("Could not open pattern table");
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(file);
    let mut cells = Vec::new();
    for result in csv_reader.deserialize() {
        let record: PatternRecord = result.expect("Could not parse pattern record");
        cells.extend(record.cells());
    }
    cells
}

/// Names (file stems) of all pattern tables in `dir`, sorted.
pub fn pattern_names_in(dir: &Path) -> Vec<String> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1).into_iter() {
        let entry = entry.expect("Could not get dir entry");
        let path = entry.path();
        if path.extension().is_some_and(|e| e == "csv") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_owned());
            }
        }
    }
    names.sort();
    names
}

pub fn pattern_names() -> Vec<String> {
    pattern_names_in(Path::new(PATTERN_DIR))
}

/// Loads the shipped table `name`.
///
/// # Panics
/// If there is no such table or it cannot be parsed.
pub fn load_pattern(name: &str) -> Vec<(Point, String)> {
    if pattern_names().iter().any(|n| n == name) {
        load_table(&table_path(Path::new(PATTERN_DIR), name))
    } else {
        panic!("Could not find pattern table `{}`", name);
    }
}
