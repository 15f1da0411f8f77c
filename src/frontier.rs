//! Min-cost frontier for the A* search.
//!
//! `BinaryHeap` is a max-heap, so entries are keyed on `Reverse((cost, seq))`.
//! `seq` is a push counter: among equal costs the earliest push pops first,
//! which keeps move sequences reproducible run to run.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::solver::SearchNode;

struct FrontierEntry {
    key: Reverse<(usize, u64)>,
    node: SearchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority queue of search nodes ordered by total estimated cost.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) {
        let key = Reverse((node.cost, self.pushed));
        self.pushed += 1;
        self.heap.push(FrontierEntry { key, node });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Removes the cheapest node, oldest first on ties.
    pub fn pop_min(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Move, Puzzle};

    fn node(cost: usize, moves: Vec<Move>) -> SearchNode {
        SearchNode {
            state: Puzzle::goal(),
            moves,
            cost,
        }
    }

    #[test]
    fn pops_lowest_cost_first() {
        let mut frontier = Frontier::new();
        for cost in [7, 3, 9, 1, 4] {
            frontier.push(node(cost, vec![]));
        }
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop_min())
            .map(|n| n.cost)
            .collect();
        assert_eq!(order, vec![1, 3, 4, 7, 9]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        frontier.push(node(5, vec![Move::Left]));
        frontier.push(node(5, vec![Move::Right]));
        frontier.push(node(2, vec![Move::Up]));
        frontier.push(node(5, vec![Move::Down]));

        let order: Vec<Move> = std::iter::from_fn(|| frontier.pop_min())
            .map(|n| n.moves[0])
            .collect();
        assert_eq!(order, vec![Move::Up, Move::Left, Move::Right, Move::Down]);
    }

    #[test]
    fn tracks_high_water() {
        let mut frontier = Frontier::new();
        frontier.push(node(1, vec![]));
        frontier.push(node(2, vec![]));
        frontier.pop_min();
        frontier.push(node(3, vec![]));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.high_water(), 2);
        assert!(frontier.pop_min().is_some());
        assert!(frontier.pop_min().is_some());
        assert!(frontier.pop_min().is_none());
    }
}
