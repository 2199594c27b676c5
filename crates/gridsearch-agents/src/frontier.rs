//! Best-first search over the tree of simple paths, shared by the
//! uniform-cost and A* agents.
//!
//! Each frontier entry owns its whole candidate path. A neighbour is skipped
//! only if it already occurs in that entry's own path; there is no global
//! closed set, so a cell may be reached through several competing paths.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridsearch_core::{Path, Position};

use crate::agent::SearchOutcome;
use crate::traits::SearchGrid;

/// A candidate path on the frontier.
///
/// `path` is never empty: it starts at the search start and grows by one
/// position per push. Costs are held in `u64` so sums of `u32` tiles stay
/// exact.
#[derive(Debug, Clone)]
pub(crate) struct FrontierNode {
    pub(crate) path: Vec<Position>,
    /// Sum of entry costs along `path`.
    pub(crate) cost: u64,
    /// Estimated remaining cost from the last position.
    pub(crate) estimate: u64,
    /// Insertion order, the final tie-break.
    pub(crate) seq: u64,
}

impl FrontierNode {
    #[inline]
    pub(crate) fn priority(&self) -> u64 {
        self.cost + self.estimate
    }

    #[inline]
    fn last(&self) -> Position {
        self.path[self.path.len() - 1]
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest
        // (priority, path length, seq) first.
        other
            .priority()
            .cmp(&self.priority())
            .then_with(|| other.path.len().cmp(&self.path.len()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

/// Pop the best candidate until one ends at `goal`. `estimate` scores a newly
/// reached position; the start is always scored 0.
pub(crate) fn best_first<G, E>(
    label: &str,
    grid: &G,
    start: Position,
    goal: Position,
    estimate: E,
) -> SearchOutcome
where
    G: SearchGrid,
    E: Fn(Position) -> u32,
{
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;
    open.push(FrontierNode {
        path: vec![start],
        cost: 0,
        estimate: 0,
        seq,
    });

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0;

    while let Some(node) = open.pop() {
        expanded += 1;
        let last = node.last();

        if last == goal {
            log::debug!(
                "{label}: {start} -> {goal}: cost {}, {} positions, {expanded} expansions",
                node.cost,
                node.path.len()
            );
            return SearchOutcome {
                path: Path::new(node.path),
                expanded,
            };
        }
        log::trace!(
            "{label}: expanding {last} (cost {}, priority {}, frontier {})",
            node.cost,
            node.priority(),
            open.len()
        );

        nbuf.clear();
        grid.neighbors(last, &mut nbuf);

        for tile in &nbuf {
            if node.path.contains(&tile.pos) {
                continue;
            }
            let mut path = Vec::with_capacity(node.path.len() + 1);
            path.extend_from_slice(&node.path);
            path.push(tile.pos);

            seq += 1;
            open.push(FrontierNode {
                path,
                cost: node.cost + u64::from(tile.cost),
                estimate: u64::from(estimate(tile.pos)),
                seq,
            });
        }
    }

    log::debug!("{label}: {start} -> {goal}: exhausted after {expanded} expansions");
    SearchOutcome {
        path: Path::empty(),
        expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::pos;

    fn node(len: usize, cost: u64, estimate: u64, seq: u64) -> FrontierNode {
        FrontierNode {
            path: vec![pos(0, 0); len],
            cost,
            estimate,
            seq,
        }
    }

    #[test]
    fn heap_pops_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        heap.push(node(1, 5, 0, 0));
        heap.push(node(1, 2, 2, 1));
        heap.push(node(1, 1, 0, 2));
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop()).map(|n| n.priority()).collect();
        assert_eq!(order, vec![1, 4, 5]);
    }

    #[test]
    fn shorter_path_wins_equal_priority() {
        let mut heap = BinaryHeap::new();
        heap.push(node(4, 3, 0, 0));
        heap.push(node(2, 3, 0, 1));
        assert_eq!(heap.pop().map(|n| n.path.len()), Some(2));
    }

    #[test]
    fn earlier_insertion_wins_full_tie() {
        let mut heap = BinaryHeap::new();
        heap.push(node(2, 3, 0, 7));
        heap.push(node(2, 3, 0, 4));
        heap.push(node(2, 3, 0, 9));
        assert_eq!(heap.pop().map(|n| n.seq), Some(4));
    }

    #[test]
    fn priority_exceeds_tile_range() {
        let max = u64::from(u32::MAX);
        assert_eq!(node(3, 2 * max, max, 0).priority(), 3 * max);
    }

    #[test]
    fn max_cost_tiles_keep_distinct_priorities() {
        let mut heap = BinaryHeap::new();
        heap.push(node(3, 2 * u64::from(u32::MAX), 0, 0));
        heap.push(node(3, 2 * u64::from(u32::MAX) - 10, 0, 1));
        assert_eq!(heap.pop().map(|n| n.seq), Some(1));
    }
}
