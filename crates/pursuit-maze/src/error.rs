use std::fmt;
use std::io;

use pursuit_core::Point;

/// Errors that can occur when loading a maze.
#[derive(Debug)]
pub enum MazeError {
    /// The input has no cells.
    Empty,
    /// A numeric row has a different width from the first row.
    InconsistentSize { row: i32, expected: i32, found: i32 },
    /// A symbol grid contains a character with no meaning.
    InvalidCell { ch: char, pos: Point },
    /// A numeric grid contains something other than `0` or `1`.
    InvalidValue { value: String, pos: Point },
    /// A required marker (`T`, `M`, or `G`/`E`) is absent.
    MissingMarker(char),
    /// A marker appears more than once.
    DuplicateMarker { ch: char, first: Point, second: Point },
    /// The maze file could not be read.
    Io(io::Error),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no cells"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidCell { ch, pos } => {
                write!(f, "maze contains invalid cell \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidValue { value, pos } => {
                write!(f, "maze contains invalid value \u{201c}{value}\u{201d} at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "maze: missing \u{201c}{ch}\u{201d} marker"),
            Self::DuplicateMarker { ch, first, second } => write!(
                f,
                "maze: marker \u{201c}{ch}\u{201d} appears at both {first} and {second}"
            ),
            Self::Io(err) => write!(f, "maze: {err}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MazeError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
