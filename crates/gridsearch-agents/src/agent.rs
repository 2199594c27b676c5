//! The closed set of search strategies behind one `find_path` call.

use std::fmt;
use std::str::FromStr;

use gridsearch_core::{Path, Position};

use crate::dfs::BacktrackingDfsAgent;
use crate::error::AgentError;
use crate::greedy::GreedyAgent;
use crate::heuristic::HeuristicAgent;
use crate::registry::{AGENT_NAMES, AgentConfig};
use crate::traits::SearchGrid;
use crate::uniform_cost::UniformCostAgent;

/// A found path together with how much work the search did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The path, empty when the goal was not reached.
    pub path: Path,
    /// Strategy-specific work count: greedy steps, DFS neighbour
    /// examinations, or frontier pops.
    pub expanded: usize,
}

/// Which strategy an [`Agent`] runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Greedy,
    Dfs,
    UniformCost,
    Heuristic,
}

impl AgentKind {
    /// Every kind, in registry order.
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Greedy,
        AgentKind::Dfs,
        AgentKind::UniformCost,
        AgentKind::Heuristic,
    ];

    /// The registry name.
    pub const fn name(self) -> &'static str {
        match self {
            AgentKind::Greedy => AGENT_NAMES[0],
            AgentKind::Dfs => AGENT_NAMES[1],
            AgentKind::UniformCost => AGENT_NAMES[2],
            AgentKind::Heuristic => AGENT_NAMES[3],
        }
    }

    /// A fresh agent of this kind.
    pub fn create(self, config: &AgentConfig) -> Agent {
        match self {
            AgentKind::Greedy => {
                let mut greedy = GreedyAgent::new();
                if let Some(seed) = config.seed {
                    greedy = greedy.with_seed(seed);
                }
                if let Some(limit) = config.greedy_step_limit {
                    greedy = greedy.with_step_limit(limit);
                }
                Agent::Greedy(greedy)
            }
            AgentKind::Dfs => Agent::Dfs(BacktrackingDfsAgent),
            AgentKind::UniformCost => Agent::UniformCost(UniformCostAgent),
            AgentKind::Heuristic => Agent::Heuristic(HeuristicAgent),
        }
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    /// Case-sensitive lookup by registry name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| AgentError::UnknownAgent {
                name: s.to_string(),
                available: &AGENT_NAMES,
            })
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A search strategy.
///
/// Agents hold configuration only. Every call builds its own frontier and
/// visited bookkeeping, so one agent can serve any number of searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Agent {
    Greedy(GreedyAgent),
    Dfs(BacktrackingDfsAgent),
    UniformCost(UniformCostAgent),
    Heuristic(HeuristicAgent),
}

impl Agent {
    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Greedy(_) => AgentKind::Greedy,
            Agent::Dfs(_) => AgentKind::Dfs,
            Agent::UniformCost(_) => AgentKind::UniformCost,
            Agent::Heuristic(_) => AgentKind::Heuristic,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Find a path from `start` to `goal`.
    ///
    /// Only the greedy agent can fail; the others report an unreachable goal
    /// with an empty path.
    pub fn find_path<G: SearchGrid>(
        &self,
        grid: &G,
        start: Position,
        goal: Position,
    ) -> Result<Path, AgentError> {
        self.search(grid, start, goal).map(|o| o.path)
    }

    /// As [`find_path`](Self::find_path), also reporting the work done.
    pub fn search<G: SearchGrid>(
        &self,
        grid: &G,
        start: Position,
        goal: Position,
    ) -> Result<SearchOutcome, AgentError> {
        match self {
            Agent::Greedy(a) => a.search(grid, start, goal),
            Agent::Dfs(a) => Ok(a.search(grid, start, goal)),
            Agent::UniformCost(a) => Ok(a.search(grid, start, goal)),
            Agent::Heuristic(a) => Ok(a.search(grid, start, goal)),
        }
    }
}

impl From<GreedyAgent> for Agent {
    fn from(a: GreedyAgent) -> Self {
        Agent::Greedy(a)
    }
}

impl From<BacktrackingDfsAgent> for Agent {
    fn from(a: BacktrackingDfsAgent) -> Self {
        Agent::Dfs(a)
    }
}

impl From<UniformCostAgent> for Agent {
    fn from(a: UniformCostAgent) -> Self {
        Agent::UniformCost(a)
    }
}

impl From<HeuristicAgent> for Agent {
    fn from(a: HeuristicAgent) -> Self {
        Agent::Heuristic(a)
    }
}
