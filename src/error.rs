use thiserror::Error;

/// A direct stamp addressed a cell outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell (row {row}, col {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },
}

/// Caller-supplied identifiers or values that cannot be used to build a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
    #[error("unknown cell colour `{0}`")]
    UnknownColor(String),
    #[error("pivot column {col} is outside 0..{cols}")]
    PivotOutOfRange { col: i32, cols: usize },
    #[error("pattern `{id}` does not fit the grid")]
    PatternOutsideGrid {
        id: String,
        #[source]
        source: GridError,
    },
}

/// The expected ways a route can fail to exist on a well-formed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathNotFound {
    #[error("no start marker cells on the grid")]
    NoStartMarkers,
    #[error("no pivot cell on the grid")]
    NoPivot,
    #[error("no route from the start markers to the pivot")]
    PivotUnreachable,
    #[error("no route from the pivot to the end markers")]
    EndUnreachable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    NotFound(#[from] PathNotFound),
}

impl RouteError {
    /// Notice shown to the user when a compute request fails.
    pub fn message(&self) -> String {
        match self {
            RouteError::Config(ConfigError::UnknownPattern(id)) => {
                format!("The pattern `{id}` does not exist.")
            }
            RouteError::Config(ConfigError::UnknownColor(color)) => {
                format!("A pattern uses the unknown colour `{color}`.")
            }
            RouteError::Config(ConfigError::PivotOutOfRange { cols, .. }) => {
                format!(
                    "The drop-off column must be between 0 and {}.",
                    cols.saturating_sub(1)
                )
            }
            RouteError::Config(ConfigError::PatternOutsideGrid { id, .. }) => {
                format!("The pattern `{id}` does not fit on the grid.")
            }
            RouteError::NotFound(PathNotFound::NoStartMarkers) => {
                "The start pattern could not be found on the grid.".to_owned()
            }
            RouteError::NotFound(PathNotFound::NoPivot) => {
                "The drop-off cell could not be found on the grid.".to_owned()
            }
            RouteError::NotFound(PathNotFound::PivotUnreachable) => {
                "No route to the drop-off cell was found.".to_owned()
            }
            RouteError::NotFound(PathNotFound::EndUnreachable) => {
                "No route to the end pattern was found.".to_owned()
            }
        }
    }
}
