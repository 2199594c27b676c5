//! Side-by-side comparison of every registered agent on one grid.

use std::fmt;
use std::time::{Duration, Instant};

use gridsearch_agents::{AGENT_NAMES, AgentConfig, AgentError, SearchOutcome, create_agent_with};
use gridsearch_core::{Grid, Position};

/// Greedy step limit used when the caller sets none, so a heuristic local
/// minimum ends the run instead of hanging it.
pub const DEFAULT_GREEDY_STEP_LIMIT: usize = 10_000;

/// Demo grid used when no grid file is given.
pub const DEMO_GRID: &str = "\
......
.##.#.
.#5...
...#..
.5....";

/// One agent's result.
#[derive(Debug)]
pub struct BenchRow {
    pub name: &'static str,
    pub outcome: Result<SearchOutcome, AgentError>,
    /// Total entry cost of the found path, `None` if no path was found.
    pub cost: Option<u64>,
    pub elapsed: Duration,
}

/// First and last passable positions in row-major order.
pub fn corners(grid: &Grid) -> Option<(Position, Position)> {
    let start = grid.passable().next()?;
    let goal = grid.passable().last()?;
    Some((start, goal))
}

/// Run every registered agent from `start` to `goal`.
pub fn run_all(
    grid: &Grid,
    start: Position,
    goal: Position,
    config: &AgentConfig,
) -> Result<Vec<BenchRow>, AgentError> {
    let mut config = config.clone();
    if config.greedy_step_limit.is_none() {
        config.greedy_step_limit = Some(DEFAULT_GREEDY_STEP_LIMIT);
    }

    let mut rows = Vec::with_capacity(AGENT_NAMES.len());
    for name in AGENT_NAMES {
        let agent = create_agent_with(name, &config)?;
        let t0 = Instant::now();
        let outcome = agent.search(grid, start, goal);
        let elapsed = t0.elapsed();
        log::info!("{name}: finished in {elapsed:?}");

        let cost = match &outcome {
            Ok(o) if !o.path.is_empty() => o.path.total_cost(grid),
            _ => None,
        };
        rows.push(BenchRow {
            name: agent.name(),
            outcome,
            cost,
            elapsed,
        });
    }
    Ok(rows)
}

/// Summary table followed by each rendered path, written through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub grid: &'a Grid,
    pub start: Position,
    pub goal: Position,
    pub rows: &'a [BenchRow],
}

/// Build the [`Report`] for one [`run_all`] result.
pub fn report<'a>(
    grid: &'a Grid,
    start: Position,
    goal: Position,
    rows: &'a [BenchRow],
) -> Report<'a> {
    Report {
        grid,
        start,
        goal,
        rows,
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid;
        writeln!(
            f,
            "{} -> {} on a {}x{} grid",
            self.start,
            self.goal,
            grid.rows(),
            grid.cols()
        )?;
        writeln!(
            f,
            "{:<16}{:>8}{:>8}{:>10}{:>14}",
            "agent", "length", "cost", "expanded", "time"
        )?;
        for row in self.rows {
            match &row.outcome {
                Ok(o) => {
                    let cost = row.cost.map_or_else(|| "-".to_string(), |c| c.to_string());
                    writeln!(
                        f,
                        "{:<16}{:>8}{:>8}{:>10}{:>14}",
                        row.name,
                        o.path.len(),
                        cost,
                        o.expanded,
                        format!("{:?}", row.elapsed)
                    )?;
                }
                Err(e) => writeln!(f, "{:<16}failed: {e}", row.name)?,
            }
        }
        for row in self.rows {
            if let Ok(o) = &row.outcome {
                if !o.path.is_empty() {
                    writeln!(f, "\n{}:\n{}", row.name, o.path.render(grid))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_skip_walls() {
        let g = Grid::parse("#..\n..#").unwrap();
        assert_eq!(corners(&g), Some((Position::new(0, 1), Position::new(1, 1))));
        assert_eq!(corners(&Grid::parse("#").unwrap()), None);
    }

    #[test]
    fn demo_grid_runs_every_agent() {
        let g = Grid::parse(DEMO_GRID).unwrap();
        let (start, goal) = corners(&g).unwrap();
        let config = AgentConfig {
            seed: Some(1),
            greedy_step_limit: None,
        };
        let rows = run_all(&g, start, goal, &config).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, AGENT_NAMES);

        let optimal: Vec<Option<u64>> = rows[2..].iter().map(|r| r.cost).collect();
        assert_eq!(optimal, vec![Some(9), Some(9)]);
        assert!(rows[1].cost.is_some_and(|c| c >= 9));
    }

    #[test]
    fn report_lists_failures() {
        let g = Grid::parse("...\n...").unwrap();
        let rows = vec![BenchRow {
            name: "Example",
            outcome: Err(AgentError::StepLimitExceeded { limit: 3 }),
            cost: None,
            elapsed: Duration::ZERO,
        }];
        let text = report(&g, Position::new(0, 0), Position::new(1, 2), &rows).to_string();
        assert!(text.contains("Example         failed: goal not reached within 3 steps"));
    }

    #[test]
    fn report_renders_found_paths() {
        let g = Grid::parse("..\n..").unwrap();
        let rows = vec![BenchRow {
            name: "AStar",
            outcome: Ok(SearchOutcome {
                path: vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)].into(),
                expanded: 3,
            }),
            cost: Some(2),
            elapsed: Duration::ZERO,
        }];
        let text = report(&g, Position::new(0, 0), Position::new(1, 1), &rows).to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("(0, 0) -> (1, 1) on a 2x2 grid"));
        assert!(text.contains("\nAStar:\nS*\n.G\n"));
    }
}
