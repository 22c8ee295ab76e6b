use crate::cell_state::CellState;
use crate::error::ConfigError;
use crate::{TRACK_REPEATS, TRACK_STRIDE};
use grid_util::point::Point;
use indexmap::IndexMap;

/// A named, ordered list of stamps. Later stamps win when two share a coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedPattern {
    pub id: String,
    pub stamps: Vec<(Point, CellState)>,
}

impl NamedPattern {
    pub fn new(id: impl Into<String>, stamps: Vec<(Point, CellState)>) -> NamedPattern {
        NamedPattern {
            id: id.into(),
            stamps,
        }
    }

    /// Builds a pattern from colour-tagged cells as found in pattern tables.
    pub fn from_colored_cells<'a, I>(
        id: impl Into<String>,
        cells: I,
    ) -> Result<NamedPattern, ConfigError>
    where
        I: IntoIterator<Item = (Point, &'a str)>,
    {
        let stamps = cells
            .into_iter()
            .map(|(p, color)| CellState::from_color(color).map(|s| (p, s)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NamedPattern::new(id, stamps))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.stamps.iter().map(|(p, _)| *p)
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}

/// A pattern repeated horizontally every `stride` columns, `repeats` times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackPattern {
    pub pattern: NamedPattern,
    pub stride: i32,
    pub repeats: usize,
}

impl TrackPattern {
    pub fn new(pattern: NamedPattern) -> TrackPattern {
        TrackPattern {
            pattern,
            stride: TRACK_STRIDE,
            repeats: TRACK_REPEATS,
        }
    }

    /// Every stamp of every repetition, repetition by repetition. Columns are not clipped to a
    /// grid here, but stamps whose column does not fit an `i32` are dropped.
    pub fn replicated(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        (0..self.repeats).flat_map(move |i| {
            let offset = i32::try_from(i)
                .ok()
                .and_then(|i| i.checked_mul(self.stride));
            self.pattern.stamps.iter().filter_map(move |(p, s)| {
                let x = p.x.checked_add(offset?)?;
                Some((Point::new(x, p.y), *s))
            })
        })
    }
}

/// The selectable frame patterns, keyed by id in insertion order.
#[derive(Clone, Debug, Default)]
pub struct PatternLibrary {
    patterns: IndexMap<String, NamedPattern>,
}

impl PatternLibrary {
    pub fn new() -> PatternLibrary {
        PatternLibrary::default()
    }

    /// Adds `pattern`, replacing any earlier pattern with the same id.
    pub fn insert(&mut self, pattern: NamedPattern) {
        self.patterns.insert(pattern.id.clone(), pattern);
    }

    pub fn get(&self, id: &str) -> Result<&NamedPattern, ConfigError> {
        self.patterns
            .get(id)
            .ok_or_else(|| ConfigError::UnknownPattern(id.to_owned()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(|k| k.as_str())
    }
}

impl FromIterator<NamedPattern> for PatternLibrary {
    fn from_iter<T: IntoIterator<Item = NamedPattern>>(iter: T) -> Self {
        let mut library = PatternLibrary::new();
        for pattern in iter {
            library.insert(pattern);
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell;

    #[test]
    fn colored_cells_map_to_states() {
        let pattern = NamedPattern::from_colored_cells(
            "frame",
            [(cell(7, 24), "black"), (cell(10, 25), "blue")],
        )
        .unwrap();
        assert_eq!(
            pattern.stamps,
            vec![
                (cell(7, 24), CellState::Obstacle),
                (cell(10, 25), CellState::StartMarker)
            ]
        );
        assert!(NamedPattern::from_colored_cells("bad", [(cell(0, 0), "teal")]).is_err());
    }

    #[test]
    fn track_replicates_at_stride() {
        let track = TrackPattern::new(NamedPattern::new(
            "track",
            vec![(cell(2, 5), CellState::Obstacle)],
        ));
        let cols = track.replicated().map(|(p, _)| p.x).collect::<Vec<_>>();
        assert_eq!(cols.len(), 11);
        assert_eq!(cols[0], 5);
        assert_eq!(cols[10], 5 + 10 * 41);
    }

    #[test]
    fn replication_drops_overflowing_columns() {
        let mut track = TrackPattern::new(NamedPattern::new(
            "track",
            vec![(cell(0, 0), CellState::Obstacle), (cell(0, 1), CellState::Obstacle)],
        ));
        track.stride = i32::MAX;
        track.repeats = 3;
        let cols = track.replicated().map(|(p, _)| p.x).collect::<Vec<_>>();
        assert_eq!(cols, vec![0, 1, i32::MAX]);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let library: PatternLibrary = [NamedPattern::new("pattern1", vec![])]
            .into_iter()
            .collect();
        assert!(library.get("pattern1").is_ok());
        assert_eq!(
            library.get("pattern3"),
            Err(ConfigError::UnknownPattern("pattern3".to_owned()))
        );
        assert_eq!(library.ids().collect::<Vec<_>>(), vec!["pattern1"]);
    }
}
