//! Compare every search agent on one grid.
//!
//! Run: cargo run --bin gridsearch-bench -- [GRID_FILE] [SEED]
//!
//! Without a grid file a built-in demo grid is used. Agents search from the
//! first to the last passable cell in row-major order.

use gridsearch_agents::AgentConfig;
use gridsearch_bench::{DEMO_GRID, corners, report, run_all};
use gridsearch_core::Grid;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let grid = match args.next() {
        Some(file) => std::fs::read_to_string(&file)?.parse::<Grid>()?,
        None => DEMO_GRID.parse::<Grid>()?,
    };
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?;

    let Some((start, goal)) = corners(&grid) else {
        return Err("grid has no passable cells".into());
    };

    let config = AgentConfig {
        seed,
        ..AgentConfig::default()
    };
    let rows = run_all(&grid, start, goal, &config)?;
    print!("{}", report(&grid, start, goal, &rows));
    Ok(())
}
