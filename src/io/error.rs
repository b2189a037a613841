//! Error types for vocabulary construction, constraint compilation and model I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all compilation and model handling operations
#[derive(Debug)]
pub enum TileError {
    /// Two tiles in one vocabulary share a name
    DuplicateTileName {
        /// The repeated name
        name: String,
    },

    /// A tile name cannot be used inside constraint and variable names
    InvalidTileName {
        /// The rejected name
        name: String,
    },

    /// A rule or edge condition names a tile outside the vocabulary
    UnknownTileReference {
        /// The unresolved tile name
        tile: String,
        /// Where the reference was found, e.g. `exclude_tiles of belt_r`
        context: String,
    },

    /// Two edge conditions pin the same cell to different tiles
    ContradictoryEdgeCondition {
        /// Cell column
        x: usize,
        /// Cell row
        y: usize,
        /// Tile pinned by the earlier condition
        first: String,
        /// Tile pinned by the later condition
        second: String,
    },

    /// Board width or height is zero or exceeds the supported maximum
    InvalidBoardDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Compilation was requested over a vocabulary with no tiles
    EmptyVocabulary,

    /// A cell reference falls outside the board
    CellOutOfBounds {
        /// Cell column
        x: usize,
        /// Cell row
        y: usize,
        /// Board dimensions (width, height)
        board: (usize, usize),
    },

    /// A constraint name was emitted twice into one constraint set
    DuplicateConstraintName {
        /// The repeated constraint name
        name: String,
    },

    /// A solver assignment cannot be read back as a tile grid
    InvalidSolution {
        /// Description of what is wrong with the assignment
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A catalog file is not valid JSON or does not match the catalog schema
    CatalogParse {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying deserialization error
        source: serde_json::Error,
    },

    /// Failed to save a rendered grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTileName { name } => {
                write!(f, "Duplicate tile name '{name}' in vocabulary")
            }
            Self::InvalidTileName { name } => {
                write!(
                    f,
                    "Invalid tile name '{name}': expected letters, digits and underscores, not starting with a digit"
                )
            }
            Self::UnknownTileReference { tile, context } => {
                write!(f, "Unknown tile '{tile}' referenced by {context}")
            }
            Self::ContradictoryEdgeCondition {
                x,
                y,
                first,
                second,
            } => {
                write!(
                    f,
                    "Contradictory edge conditions at ({x}, {y}): pinned to both '{first}' and '{second}'"
                )
            }
            Self::InvalidBoardDimensions { width, height } => {
                write!(f, "Invalid board dimensions {width}x{height}")
            }
            Self::EmptyVocabulary => write!(f, "Tile vocabulary is empty"),
            Self::CellOutOfBounds { x, y, board } => {
                write!(
                    f,
                    "Cell ({x}, {y}) is outside the {}x{} board",
                    board.0, board.1
                )
            }
            Self::DuplicateConstraintName { name } => {
                write!(f, "Constraint name '{name}' emitted twice")
            }
            Self::InvalidSolution { reason } => write!(f, "Invalid solution: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CatalogParse { path, source } => {
                write!(f, "Failed to parse catalog '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, TileError>;

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for TileError {
    fn from(err: serde_json::Error) -> Self {
        Self::CatalogParse {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid solution error
pub fn invalid_solution(reason: &impl ToString) -> TileError {
    TileError::InvalidSolution {
        reason: reason.to_string(),
    }
}
