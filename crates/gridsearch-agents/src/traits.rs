use gridsearch_core::{Grid, Position, Tile};

/// The grid capability every search strategy consumes.
pub trait SearchGrid {
    /// Append the traversable 4-neighbours of `p` into `buf`. The caller
    /// clears `buf` before calling.
    ///
    /// The order must be stable (east, south, west, north for [`Grid`]):
    /// the greedy and frontier searches break ties by it.
    fn neighbors(&self, p: Position, buf: &mut Vec<Tile>);

    /// Estimated cost of moving from `from` to `to`. Must never overestimate
    /// the true cost for the A* agent to stay optimal.
    fn heuristic(&self, from: Position, to: Position) -> u32 {
        from.manhattan(to)
    }
}

impl SearchGrid for Grid {
    fn neighbors(&self, p: Position, buf: &mut Vec<Tile>) {
        self.neighbors4_into(p, buf);
    }

    fn heuristic(&self, from: Position, to: Position) -> u32 {
        self.manhattan(from, to)
    }
}
