//! A* search over board states.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use log::{debug, info, trace};

use crate::error::SolveError;
use crate::frontier::Frontier;
use crate::heuristic::{manhattan_distance, step_cost};
use crate::puzzle::{Move, Puzzle};

/// A board reached during search together with the path that led there.
///
/// `cost` is moves taken plus the Manhattan estimate from `state`.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: Puzzle,
    pub moves: Vec<Move>,
    pub cost: usize,
}

/// Counters reported alongside a solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct arrangements recorded in the explored table.
    pub explored: usize,
    /// Candidates dropped because a cheaper or equal path was already known.
    pub ignored: usize,
    /// Nodes popped and expanded.
    pub expanded: usize,
    /// Largest frontier size seen.
    pub peak_frontier: usize,
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub state: Puzzle,
    pub moves: Vec<Move>,
    pub cost: usize,
    pub stats: SearchStats,
}

impl Solution {
    /// Every board from `start` through the final one, applying `moves` in order.
    ///
    /// Moves that are illegal on `start`'s path are skipped, so a mismatched
    /// start never panics but will not end on the goal.
    pub fn replay(&self, start: &Puzzle) -> Vec<Puzzle> {
        let mut current = start.snapshot();
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        boards.push(current.snapshot());
        for &dir in &self.moves {
            if current.apply_move(dir) {
                boards.push(current.snapshot());
            }
        }
        boards
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moves: Vec<String> = self.moves.iter().map(Move::to_string).collect();
        writeln!(f, "{}", self.state.fingerprint())?;
        writeln!(f, "[{}]", moves.join(" "))?;
        write!(f, "{}", self.cost)
    }
}

/// Validates the board, applies the parity gate, then searches.
pub fn solve(puzzle: &Puzzle) -> Result<Solution, SolveError> {
    solve_bounded(puzzle, None)
}

/// [`solve`] that gives up once `max_states` arrangements have been recorded.
pub fn solve_bounded(
    puzzle: &Puzzle,
    max_states: Option<usize>,
) -> Result<Solution, SolveError> {
    if !puzzle.is_valid() {
        return Err(SolveError::InvalidPermutation);
    }
    if !puzzle.is_solvable() {
        debug!("parity check rejected {}", puzzle.fingerprint());
        return Err(SolveError::Unsolvable);
    }
    a_star_bounded(puzzle, max_states)
}

/// Best-first search from `start` to the goal arrangement.
///
/// `start` must be a valid permutation; this function does not check.
/// The explored table maps each fingerprint to the cheapest cost at which it
/// was queued, and a candidate is only queued when it beats that cost.
pub fn a_star(start: &Puzzle) -> Result<Solution, SolveError> {
    a_star_bounded(start, None)
}

/// [`a_star`] with an optional cap on the size of the explored table.
///
/// The cap is checked before each expansion, so a goal already at the front
/// of the frontier is still returned.
pub fn a_star_bounded(
    start: &Puzzle,
    max_states: Option<usize>,
) -> Result<Solution, SolveError> {
    let root = SearchNode {
        state: start.snapshot(),
        moves: Vec::new(),
        cost: manhattan_distance(start),
    };
    debug!(
        "searching from {} with estimate {}",
        start.fingerprint(),
        root.cost
    );

    let mut explored: HashMap<String, usize> = HashMap::new();
    explored.insert(start.fingerprint(), root.cost);
    let mut frontier = Frontier::new();
    frontier.push(root);

    let mut stats = SearchStats::default();

    while let Some(mut node) = frontier.pop_min() {
        if node.state.is_solved() {
            stats.explored = explored.len();
            stats.peak_frontier = frontier.high_water();
            info!("Explored: {} Ignored: {}", stats.explored, stats.ignored);
            return Ok(Solution {
                state: node.state,
                moves: node.moves,
                cost: node.cost,
                stats,
            });
        }

        if let Some(limit) = max_states.filter(|&limit| explored.len() >= limit) {
            stats.explored = explored.len();
            stats.peak_frontier = frontier.high_water();
            debug!("giving up after {} states", stats.explored);
            return Err(SolveError::StateLimit { limit, stats });
        }

        stats.expanded += 1;
        trace!(
            "expanding {} at cost {} after {} moves",
            node.state.fingerprint(),
            node.cost,
            node.moves.len()
        );

        let last = node.moves.last().copied();
        let old_space = node.state.space_index();
        for dir in Move::ALL {
            if last == Some(dir.opposite()) {
                continue;
            }
            // Probe in place; only survivors pay for a copy.
            if !node.state.apply_move(dir) {
                continue;
            }
            let tile = node.state.tile_at(old_space);
            let cost = step_cost(node.cost, tile, node.state.space_index(), old_space);
            let key = node.state.fingerprint();

            if !record_if_cheaper(&mut explored, key, cost) {
                stats.ignored += 1;
            } else {
                let mut moves = Vec::with_capacity(node.moves.len() + 1);
                moves.extend_from_slice(&node.moves);
                moves.push(dir);
                frontier.push(SearchNode {
                    state: node.state.snapshot(),
                    moves,
                    cost,
                });
            }
            node.state.apply_move(dir.opposite());
        }
    }

    stats.explored = explored.len();
    stats.peak_frontier = frontier.high_water();
    log::error!(
        "frontier exhausted after {} states ({} expanded, {} ignored)",
        stats.explored,
        stats.expanded,
        stats.ignored
    );
    Err(SolveError::ExhaustedFrontier { stats })
}

/// Stores `cost` for `key` unless an equal or cheaper cost is already known.
///
/// Returns `false` when the candidate should be dropped.
fn record_if_cheaper(
    explored: &mut HashMap<String, usize>,
    key: String,
    cost: usize,
) -> bool {
    match explored.entry(key) {
        Entry::Occupied(mut known) => {
            if *known.get() <= cost {
                return false;
            }
            known.insert(cost);
            true
        }
        Entry::Vacant(slot) => {
            slot.insert(cost);
            true
        }
    }
}
