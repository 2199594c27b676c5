//! A static, weighted, 4-connected grid.
//!
//! Every cell is either a wall or a passable tile with a non-negative entry
//! cost. Grids are built programmatically or parsed from text:
//!
//! ```text
//! ..#.
//! .3#.
//! ....
//! ```
//!
//! `#` is a wall, `.` costs 1 and a digit `0`–`9` costs that much.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Direction, Position, Tile};

/// A rectangular grid of optional tile costs (`None` is a wall).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    tiles: Vec<Option<u32>>,
}

impl Grid {
    /// Create a `rows` x `cols` grid where every tile costs 1.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, 1)
    }

    /// Create a `rows` x `cols` grid where every tile costs `cost`.
    pub fn filled(rows: i32, cols: i32, cost: u32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            rows,
            cols,
            tiles: vec![Some(cost); rows as usize * cols as usize],
        }
    }

    /// Build a grid from row-major tile costs.
    ///
    /// Returns `None` when either dimension is negative or `tiles.len()` does
    /// not equal `rows * cols`.
    pub fn from_costs(rows: i32, cols: i32, tiles: Vec<Option<u32>>) -> Option<Self> {
        if rows < 0 || cols < 0 {
            return None;
        }
        let len = (rows as usize).checked_mul(cols as usize)?;
        if tiles.len() != len {
            return None;
        }
        Some(Self { rows, cols, tiles })
    }

    /// Parse the text format described in the module docs.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::new();
        let mut cols = None;
        let mut rows = 0;
        for (row, line) in s.lines().enumerate() {
            let width = line.chars().count();
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(GridError::InconsistentWidth {
                        row,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            for (col, ch) in line.chars().enumerate() {
                let tile = match ch {
                    '#' => None,
                    '.' => Some(1),
                    _ => match ch.to_digit(10) {
                        Some(d) => Some(d),
                        None => {
                            return Err(GridError::InvalidTile {
                                ch,
                                pos: Position::new(row as i32, col as i32),
                            });
                        }
                    },
                };
                tiles.push(tile);
            }
            rows += 1;
        }

        Ok(Self {
            rows,
            cols: cols.unwrap_or(0) as i32,
            tiles,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    #[inline]
    fn index(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Entry cost of `p`, or `None` for walls and out-of-bounds positions.
    pub fn cost_at(&self, p: Position) -> Option<u32> {
        self.index(p).and_then(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Position) -> bool {
        self.cost_at(p).is_some()
    }

    /// Set the entry cost of `p`. Does nothing if out of bounds.
    pub fn set_cost(&mut self, p: Position, cost: u32) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = Some(cost);
        }
    }

    /// Turn `p` into a wall. Does nothing if out of bounds.
    pub fn set_wall(&mut self, p: Position) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = None;
        }
    }

    /// Passable 4-neighbours of `p` in east, south, west, north order.
    pub fn neighbors4(&self, p: Position) -> Vec<Tile> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors4_into(p, &mut buf);
        buf
    }

    /// Append the passable 4-neighbours of `p` into `buf`, in east, south,
    /// west, north order. The caller clears `buf`.
    pub fn neighbors4_into(&self, p: Position, buf: &mut Vec<Tile>) {
        for dir in Direction::ALL {
            let n = p.step(dir);
            if let Some(cost) = self.cost_at(n) {
                buf.push(Tile::new(n, cost));
            }
        }
    }

    /// Manhattan distance between two positions.
    #[inline]
    pub fn manhattan(&self, a: Position, b: Position) -> u32 {
        a.manhattan(b)
    }

    /// Iterate over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Iterate over every passable position in row-major order.
    pub fn passable(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| self.is_passable(p))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes the text format. Costs above 9 have no single-character form and
/// are written as `+`, so such grids do not round-trip.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                let ch = match self.cost_at(Position::new(row, col)) {
                    None => '#',
                    Some(1) => '.',
                    Some(c) => char::from_digit(c, 10).unwrap_or('+'),
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
