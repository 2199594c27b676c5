//! Fixtures and brute-force oracles shared by the agent tests.

use std::collections::HashSet;

use gridsearch_core::{Grid, Path, Position};

pub(crate) fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

pub(crate) fn grid(s: &str) -> Grid {
    Grid::parse(s).unwrap()
}

/// A 4x4 grid with mixed costs and a wall, small enough to enumerate.
pub(crate) const WEIGHTED: &str = "\
.5..
.9#.
.1.7
3..1";

/// The goal at (0, 3) is sealed off from the left half.
pub(crate) const SPLIT: &str = "\
..#.
..#.
..#.";

/// Minimum entry cost over every simple path from `start` to `goal`, found by
/// exhaustive enumeration.
pub(crate) fn brute_force_min_cost(g: &Grid, start: Position, goal: Position) -> Option<u64> {
    fn walk(
        g: &Grid,
        at: Position,
        goal: Position,
        cost: u64,
        seen: &mut HashSet<Position>,
        best: &mut Option<u64>,
    ) {
        if at == goal {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for t in g.neighbors4(at) {
            if seen.insert(t.pos) {
                walk(g, t.pos, goal, cost + u64::from(t.cost), seen, best);
                seen.remove(&t.pos);
            }
        }
    }

    let mut best = None;
    let mut seen = HashSet::from([start]);
    walk(g, start, goal, 0, &mut seen, &mut best);
    best
}

/// Assert `path` is a simple, contiguous walk from `start` to `goal`.
pub(crate) fn assert_valid(path: &Path, start: Position, goal: Position) {
    assert_eq!(path.first(), Some(start), "path {path} does not begin at {start}");
    assert_eq!(path.last(), Some(goal), "path {path} does not end at {goal}");
    assert!(path.is_simple(), "path {path} repeats a position");
    assert!(path.is_contiguous(), "path {path} has a non-adjacent step");
}
