use crate::error::ConfigError;
use core::fmt;

/// The role a single grid cell plays. Only [CellState::Obstacle] blocks movement; every other
/// state is traversable and only matters for picking sources and targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Obstacle,
    StartMarker,
    EndMarker,
    Pivot,
    PathOverlay,
    TrackSegment,
}

/// Colours used by the renderer, one per [CellState].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayColor {
    Background,
    Opaque,
    Start,
    End,
    Pivot,
    Highlight,
    Track,
}

impl DisplayColor {
    /// CSS colour name, as stored in pattern tables.
    pub fn name(self) -> &'static str {
        match self {
            DisplayColor::Background => "white",
            DisplayColor::Opaque => "black",
            DisplayColor::Start => "blue",
            DisplayColor::End => "green",
            DisplayColor::Pivot => "red",
            DisplayColor::Highlight => "lightgreen",
            DisplayColor::Track => "gray",
        }
    }
}

impl CellState {
    pub const ALL: [CellState; 7] = [
        CellState::Empty,
        CellState::Obstacle,
        CellState::StartMarker,
        CellState::EndMarker,
        CellState::Pivot,
        CellState::PathOverlay,
        CellState::TrackSegment,
    ];

    pub fn is_obstacle(self) -> bool {
        self == CellState::Obstacle
    }

    pub fn display_color(self) -> DisplayColor {
        match self {
            CellState::Empty => DisplayColor::Background,
            CellState::Obstacle => DisplayColor::Opaque,
            CellState::StartMarker => DisplayColor::Start,
            CellState::EndMarker => DisplayColor::End,
            CellState::Pivot => DisplayColor::Pivot,
            CellState::PathOverlay => DisplayColor::Highlight,
            CellState::TrackSegment => DisplayColor::Track,
        }
    }

    /// Parses a colour name from a pattern table back into the state it encodes.
    pub fn from_color(color: &str) -> Result<CellState, ConfigError> {
        let color = color.trim();
        CellState::ALL
            .into_iter()
            .find(|s| s.display_color().name().eq_ignore_ascii_case(color))
            .ok_or_else(|| ConfigError::UnknownColor(color.to_owned()))
    }

    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Obstacle => '#',
            CellState::StartMarker => 'S',
            CellState::EndMarker => 'E',
            CellState::Pivot => 'P',
            CellState::PathOverlay => '*',
            CellState::TrackSegment => '=',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
