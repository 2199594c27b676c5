use std::fmt;

use crate::geom::Position;

/// Errors that can occur when parsing a [`Grid`](crate::Grid) from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The text contains no rows.
    Empty,
    /// A row's width differs from the first row.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither `#`, `.` nor a digit.
    InvalidTile { ch: char, pos: Position },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidTile { ch, pos } => {
                write!(f, "grid contains invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
