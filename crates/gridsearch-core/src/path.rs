//! The [`Path`] value returned by every search.

use std::collections::HashSet;
use std::fmt;

use crate::geom::Position;
use crate::grid::Grid;

/// An ordered sequence of positions from start to goal.
///
/// An empty path means no path was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Position>);

impl Path {
    pub fn new(positions: Vec<Position>) -> Self {
        Self(positions)
    }

    /// The "no path" sentinel.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn first(&self) -> Option<Position> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Position> {
        self.0.last().copied()
    }

    pub fn contains(&self, p: Position) -> bool {
        self.0.contains(&p)
    }

    /// Whether no position occurs twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().all(|p| seen.insert(*p))
    }

    /// Whether every consecutive pair is 4-adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Sum of the entry costs of every position after the first.
    ///
    /// Returns `None` if any of those positions is a wall or out of bounds.
    /// The empty path and single-position paths cost 0. The sum is taken in
    /// `u64`, wide enough for any simple path of `u32` tiles.
    pub fn total_cost(&self, grid: &Grid) -> Option<u64> {
        self.0.iter().skip(1).try_fold(0u64, |acc, &p| {
            let c = grid.cost_at(p)?;
            acc.checked_add(u64::from(c))
        })
    }

    /// Draw the path over `grid`: `S` start, `G` goal, `*` path, `#` wall,
    /// `.` anything else.
    pub fn render(&self, grid: &Grid) -> String {
        let on_path: HashSet<Position> = self.0.iter().copied().collect();
        let mut out = String::with_capacity(((grid.cols() + 1) * grid.rows()) as usize);
        for row in 0..grid.rows() {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..grid.cols() {
                let p = Position::new(row, col);
                let ch = if self.first() == Some(p) {
                    'S'
                } else if self.last() == Some(p) {
                    'G'
                } else if on_path.contains(&p) {
                    '*'
                } else if grid.is_passable(p) {
                    '.'
                } else {
                    '#'
                };
                out.push(ch);
            }
        }
        out
    }

    pub fn into_inner(self) -> Vec<Position> {
        self.0
    }
}

impl From<Vec<Position>> for Path {
    fn from(v: Vec<Position>) -> Self {
        Self(v)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<no path>");
        }
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ps: &[(i32, i32)]) -> Path {
        ps.iter().map(|&p| Position::from(p)).collect::<Vec<_>>().into()
    }

    #[test]
    fn empty_is_no_path() {
        let p = Path::empty();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert_eq!(p.first(), None);
        assert_eq!(p.to_string(), "<no path>");
    }

    #[test]
    fn simple_and_contiguous() {
        let p = path(&[(0, 0), (0, 1), (1, 1)]);
        assert!(p.is_simple());
        assert!(p.is_contiguous());

        let looped = path(&[(0, 0), (0, 1), (0, 0)]);
        assert!(!looped.is_simple());
        assert!(looped.is_contiguous());

        let jump = path(&[(0, 0), (1, 1)]);
        assert!(!jump.is_contiguous());
    }

    #[test]
    fn total_cost_skips_start() {
        let g = Grid::parse("19\n.5").unwrap();
        let p = path(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(p.total_cost(&g), Some(14));
        assert_eq!(path(&[(1, 1)]).total_cost(&g), Some(0));
        assert_eq!(Path::empty().total_cost(&g), Some(0));
    }

    #[test]
    fn total_cost_exceeds_tile_range() {
        let g = Grid::from_costs(1, 3, vec![Some(0), Some(u32::MAX), Some(u32::MAX)]).unwrap();
        let p = path(&[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(p.total_cost(&g), Some(2 * u64::from(u32::MAX)));
    }

    #[test]
    fn total_cost_rejects_walls() {
        let g = Grid::parse(".#\n..").unwrap();
        assert_eq!(path(&[(0, 0), (0, 1)]).total_cost(&g), None);
    }

    #[test]
    fn display_and_render() {
        let g = Grid::parse("...\n.#.\n...").unwrap();
        let p = path(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(p.to_string(), "(0, 0) -> (0, 1) -> (0, 2) -> (1, 2) -> (2, 2)");
        assert_eq!(p.render(&g), "S**\n.#*\n..G");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path::new(vec![Position::new(0, 0), Position::new(0, 1)]);
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
