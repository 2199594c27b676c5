//! A* search.

use gridsearch_core::{Path, Position};

use crate::agent::SearchOutcome;
use crate::frontier;
use crate::traits::SearchGrid;

/// Uniform-cost search ordered by accumulated cost plus the grid heuristic
/// from the candidate's last position to the goal.
///
/// Returns a cheapest path as long as [`SearchGrid::heuristic`] never
/// overestimates. Manhattan distance qualifies when every tile costs at
/// least 1; on grids with cheaper tiles the result may be suboptimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicAgent;

impl HeuristicAgent {
    pub fn new() -> Self {
        Self
    }

    /// Returns the empty path when the goal is unreachable.
    pub fn find_path<G: SearchGrid>(&self, grid: &G, start: Position, goal: Position) -> Path {
        self.search(grid, start, goal).path
    }

    /// As [`find_path`](Self::find_path); `expanded` counts frontier pops.
    pub fn search<G: SearchGrid>(&self, grid: &G, start: Position, goal: Position) -> SearchOutcome {
        frontier::best_first("a*", grid, start, goal, |p| grid.heuristic(p, goal))
    }
}
