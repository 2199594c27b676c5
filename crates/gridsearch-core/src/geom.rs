//! Geometry primitives: [`Position`], [`Direction`] and [`Tile`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid cell addressed by `(row, col)`. Rows grow downwards, columns to the
/// right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return the position one step away in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four cardinal neighbours in [`Direction::ALL`] order
    /// (east, south, west, north). Bounds are not checked.
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves.
///
/// The declaration order is the tie-break priority used by the searches:
/// east first, then south, west and north.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// All directions in priority order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// `(d_row, d_col)` offset of a single step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
        }
    }

    /// Tie-break rank: east 0, south 1, west 2, north 3.
    #[inline]
    pub const fn priority(self) -> u8 {
        match self {
            Direction::East => 0,
            Direction::South => 1,
            Direction::West => 2,
            Direction::North => 3,
        }
    }

    /// The direction of the single step `from -> to`, or `None` when the two
    /// positions are not 4-adjacent.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        let d = to - from;
        Direction::ALL
            .into_iter()
            .find(|dir| dir.delta() == (d.row, d.col))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::North => "north",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// A neighbour query result: a traversable position and the cost of entering it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub pos: Position,
    pub cost: u32,
}

impl Tile {
    #[inline]
    pub const fn new(pos: Position, cost: u32) -> Self {
        Self { pos, cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_priority_order() {
        let p = Position::new(2, 2);
        assert_eq!(
            p.neighbors_4(),
            [
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(2, 1),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(-1, 4);
        let b = Position::new(3, 1);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn direction_between_adjacent() {
        let p = Position::new(5, 5);
        for dir in Direction::ALL {
            assert_eq!(Direction::between(p, p.step(dir)), Some(dir));
        }
        assert_eq!(Direction::between(p, Position::new(6, 6)), None);
        assert_eq!(Direction::between(p, p), None);
    }

    #[test]
    fn priority_matches_declaration_order() {
        let ranks: Vec<u8> = Direction::ALL.iter().map(|d| d.priority()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert!(Direction::East < Direction::North);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut ps = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        ps.sort();
        assert_eq!(
            ps,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 0)]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(3, -2).to_string(), "(3, -2)");
        assert_eq!(Direction::West.to_string(), "west");
    }
}
