//! Agent selection by name.

use crate::agent::{Agent, AgentKind};
use crate::error::AgentError;

/// Registered strategy names, in registry order.
pub const AGENT_NAMES: [&str; 4] = ["Example", "DFS", "BranchAndBound", "AStar"];

/// Settings applied when an agent is created by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Tie-break seed for the greedy agent. `None` draws one per search.
    pub seed: Option<u64>,
    /// Maximum number of greedy steps. `None` lets the greedy agent walk
    /// forever on a heuristic local minimum.
    pub greedy_step_limit: Option<usize>,
}

/// Create the agent registered as `name` with default settings.
pub fn create_agent(name: &str) -> Result<Agent, AgentError> {
    create_agent_with(name, &AgentConfig::default())
}

/// Create the agent registered as `name` (case-sensitive).
pub fn create_agent_with(name: &str, config: &AgentConfig) -> Result<Agent, AgentError> {
    let kind: AgentKind = name.parse()?;
    log::debug!("creating agent {kind} with {config:?}");
    Ok(kind.create(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfs::BacktrackingDfsAgent;
    use crate::greedy::GreedyAgent;
    use crate::heuristic::HeuristicAgent;
    use crate::uniform_cost::UniformCostAgent;

    #[test]
    fn creates_every_registered_agent() {
        assert_eq!(create_agent("Example"), Ok(Agent::Greedy(GreedyAgent::new())));
        assert_eq!(create_agent("DFS"), Ok(Agent::Dfs(BacktrackingDfsAgent)));
        assert_eq!(
            create_agent("BranchAndBound"),
            Ok(Agent::UniformCost(UniformCostAgent))
        );
        assert_eq!(create_agent("AStar"), Ok(Agent::Heuristic(HeuristicAgent)));
    }

    #[test]
    fn names_match_kinds() {
        let names: Vec<&str> = AgentKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, AGENT_NAMES);
        for name in AGENT_NAMES {
            assert_eq!(create_agent(name).map(|a| a.name()), Ok(name));
        }
    }

    #[test]
    fn unknown_agent_lists_available() {
        let err = create_agent("Foo").unwrap_err();
        assert_eq!(
            err,
            AgentError::UnknownAgent {
                name: "Foo".to_string(),
                available: &["Example", "DFS", "BranchAndBound", "AStar"],
            }
        );
        assert_eq!(
            err.to_string(),
            "unknown agent \u{201c}Foo\u{201d}, available: Example, DFS, BranchAndBound, AStar"
        );
    }

    #[test]
    fn config_reaches_greedy_agent() {
        let config = AgentConfig {
            seed: Some(42),
            greedy_step_limit: None,
        };
        let agent = create_agent_with("Example", &config).unwrap();
        assert_eq!(agent, Agent::Greedy(GreedyAgent::new().with_seed(42)));
    }
}
