use std::fmt;

use gridsearch_core::Position;

/// Errors reported by agent construction and by the greedy agent.
///
/// The complete searches never fail: they return an empty
/// [`Path`](gridsearch_core::Path) when the goal is unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// No agent is registered under `name`.
    UnknownAgent {
        name: String,
        available: &'static [&'static str],
    },
    /// The greedy agent reached a non-goal cell without neighbours.
    ExhaustedNeighbors { at: Position },
    /// The greedy agent took `limit` steps without reaching the goal.
    StepLimitExceeded { limit: usize },
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAgent { name, available } => write!(
                f,
                "unknown agent \u{201c}{name}\u{201d}, available: {}",
                available.join(", ")
            ),
            Self::ExhaustedNeighbors { at } => {
                write!(f, "no neighbours to step to from {at}")
            }
            Self::StepLimitExceeded { limit } => {
                write!(f, "goal not reached within {limit} steps")
            }
        }
    }
}

impl std::error::Error for AgentError {}
