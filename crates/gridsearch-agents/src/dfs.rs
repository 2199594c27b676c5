//! Depth-first search with a permanent visited set.

use std::collections::HashSet;

use gridsearch_core::{Direction, Path, Position, Tile};

use crate::agent::SearchOutcome;
use crate::traits::SearchGrid;

/// Depth-first search that backtracks when stuck and never revisits a cell.
///
/// Among unvisited neighbours the cheapest tile wins, ties going east, then
/// south, west and north. Cells stay visited after being backtracked past, so
/// the search terminates on any finite grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackingDfsAgent;

impl BacktrackingDfsAgent {
    pub fn new() -> Self {
        Self
    }

    /// Returns the empty path when the goal is unreachable.
    pub fn find_path<G: SearchGrid>(&self, grid: &G, start: Position, goal: Position) -> Path {
        self.search(grid, start, goal).path
    }

    /// As [`find_path`](Self::find_path); `expanded` counts neighbour
    /// examinations, one per push or backtrack.
    pub fn search<G: SearchGrid>(&self, grid: &G, start: Position, goal: Position) -> SearchOutcome {
        let mut nodes = vec![start];
        let mut visited = HashSet::from([start]);
        let mut nbuf = Vec::with_capacity(4);
        let mut expanded = 0;

        while let Some(&top) = nodes.last() {
            if top == goal {
                log::debug!(
                    "dfs: {start} -> {goal}: {} positions, {expanded} expansions",
                    nodes.len()
                );
                return SearchOutcome {
                    path: Path::new(nodes),
                    expanded,
                };
            }
            expanded += 1;

            nbuf.clear();
            grid.neighbors(top, &mut nbuf);

            let next = nbuf
                .iter()
                .filter(|t| !visited.contains(&t.pos))
                .min_by_key(|t| tie_break_key(top, t));

            match next {
                Some(t) => {
                    visited.insert(t.pos);
                    nodes.push(t.pos);
                }
                None => {
                    log::trace!("dfs: backtracking from {top}");
                    nodes.pop();
                }
            }
        }

        log::debug!("dfs: {start} -> {goal}: exhausted after {expanded} expansions");
        SearchOutcome {
            path: Path::empty(),
            expanded,
        }
    }
}

/// `(cost, direction priority)`. A neighbour that is not a cardinal step away
/// sorts after every cardinal one.
fn tie_break_key(from: Position, tile: &Tile) -> (u32, u8) {
    let rank = Direction::between(from, tile.pos).map_or(u8::MAX, Direction::priority);
    (tile.cost, rank)
}
