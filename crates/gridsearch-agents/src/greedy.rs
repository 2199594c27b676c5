//! Greedy heuristic descent, the baseline strategy.

use gridsearch_core::{Path, Position};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::agent::SearchOutcome;
use crate::error::AgentError;
use crate::traits::SearchGrid;

/// Steps to whichever neighbour is closest to the goal by heuristic, picking
/// uniformly at random among equally close ones.
///
/// There is no backtracking and no visited set. When the grid has a heuristic
/// local minimum that is not the goal (a wall facing the goal, say) the walk
/// oscillates forever unless a step limit is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreedyAgent {
    seed: Option<u64>,
    step_limit: Option<usize>,
}

impl GreedyAgent {
    /// An unseeded agent without a step limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the tie-break seed so repeated searches return the same path.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Give up with [`AgentError::StepLimitExceeded`] after `limit` steps.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    pub fn find_path<G: SearchGrid>(
        &self,
        grid: &G,
        start: Position,
        goal: Position,
    ) -> Result<Path, AgentError> {
        self.search(grid, start, goal).map(|o| o.path)
    }

    /// Search with a fresh [`StdRng`] seeded from the configured seed, or from
    /// entropy when unseeded.
    pub fn search<G: SearchGrid>(
        &self,
        grid: &G,
        start: Position,
        goal: Position,
    ) -> Result<SearchOutcome, AgentError> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        self.search_with_rng(grid, start, goal, &mut rng)
    }

    pub fn find_path_with_rng<G: SearchGrid, R: Rng + ?Sized>(
        &self,
        grid: &G,
        start: Position,
        goal: Position,
        rng: &mut R,
    ) -> Result<Path, AgentError> {
        self.search_with_rng(grid, start, goal, rng).map(|o| o.path)
    }

    /// Search drawing tie-breaks from `rng`. `expanded` counts steps taken.
    pub fn search_with_rng<G: SearchGrid, R: Rng + ?Sized>(
        &self,
        grid: &G,
        start: Position,
        goal: Position,
        rng: &mut R,
    ) -> Result<SearchOutcome, AgentError> {
        let mut nodes = vec![start];
        let mut current = start;
        let mut nbuf = Vec::with_capacity(4);
        let mut best = Vec::with_capacity(4);

        while current != goal {
            let steps = nodes.len() - 1;
            if let Some(limit) = self.step_limit {
                if steps >= limit {
                    log::debug!("greedy: {start} -> {goal}: gave up after {limit} steps");
                    return Err(AgentError::StepLimitExceeded { limit });
                }
            }

            nbuf.clear();
            grid.neighbors(current, &mut nbuf);

            let Some(min_dist) = nbuf.iter().map(|t| grid.heuristic(t.pos, goal)).min() else {
                log::debug!("greedy: {start} -> {goal}: stuck at {current}");
                return Err(AgentError::ExhaustedNeighbors { at: current });
            };

            best.clear();
            best.extend(
                nbuf.iter()
                    .filter(|t| grid.heuristic(t.pos, goal) == min_dist)
                    .map(|t| t.pos),
            );
            let next = best[rng.random_range(0..best.len())];
            log::trace!("greedy: {current} -> {next} ({} tied at {min_dist})", best.len());

            nodes.push(next);
            current = next;
        }

        let expanded = nodes.len() - 1;
        log::debug!("greedy: {start} -> {goal}: {expanded} steps");
        Ok(SearchOutcome {
            path: Path::new(nodes),
            expanded,
        })
    }
}
