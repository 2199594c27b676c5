//! Uniform-cost ("branch-and-bound") search.

use gridsearch_core::{Path, Position};

use crate::agent::SearchOutcome;
use crate::frontier;
use crate::traits::SearchGrid;

/// Expands candidate paths in order of accumulated cost, shorter paths first
/// on equal cost. The first candidate to reach the goal is a cheapest path.
///
/// Candidates only avoid cells already on their own path, so the number of
/// candidates can grow exponentially with the grid size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCostAgent;

impl UniformCostAgent {
    pub fn new() -> Self {
        Self
    }

    /// Returns the empty path when the goal is unreachable.
    pub fn find_path<G: SearchGrid>(&self, grid: &G, start: Position, goal: Position) -> Path {
        self.search(grid, start, goal).path
    }

    /// As [`find_path`](Self::find_path); `expanded` counts frontier pops.
    pub fn search<G: SearchGrid>(&self, grid: &G, start: Position, goal: Position) -> SearchOutcome {
        frontier::best_first("branch-and-bound", grid, start, goal, |_| 0)
    }
}
