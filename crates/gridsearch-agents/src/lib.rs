//! Interchangeable path-search strategies on a weighted grid.
//!
//! Every strategy answers the same question, "how do I get from `start` to
//! `goal`?", so their results and effort can be compared side by side:
//!
//! | Registry name | Agent | Strategy |
//! |---|---|---|
//! | `Example` | [`GreedyAgent`] | heuristic descent, random tie-break, may not terminate |
//! | `DFS` | [`BacktrackingDfsAgent`] | depth-first with a permanent visited set |
//! | `BranchAndBound` | [`UniformCostAgent`] | best-first by accumulated cost |
//! | `AStar` | [`HeuristicAgent`] | best-first by cost plus heuristic |
//!
//! Agents are selected with [`create_agent`] and run through [`Agent::find_path`]
//! against anything implementing [`SearchGrid`], including
//! [`gridsearch_core::Grid`].

mod agent;
mod dfs;
mod error;
mod frontier;
mod greedy;
mod heuristic;
mod registry;
mod traits;
mod uniform_cost;

#[cfg(test)]
mod testutil;

pub use agent::{Agent, AgentKind, SearchOutcome};
pub use dfs::BacktrackingDfsAgent;
pub use error::AgentError;
pub use greedy::GreedyAgent;
pub use heuristic::HeuristicAgent;
pub use registry::{AGENT_NAMES, AgentConfig, create_agent, create_agent_with};
pub use traits::SearchGrid;
pub use uniform_cost::UniformCostAgent;
