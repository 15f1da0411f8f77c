//! Manhattan-distance estimate of the moves left to reach the goal.

use crate::puzzle::{Puzzle, BLANK, SIZE};

/// Grid distance between where `tile` sits (`index`) and its goal cell.
///
/// The blank contributes nothing.
pub fn tile_distance(tile: u32, index: usize) -> usize {
    if tile == BLANK {
        return 0;
    }
    let goal = tile as usize - 1;
    let (row, col) = (index / SIZE, index % SIZE);
    let (goal_row, goal_col) = (goal / SIZE, goal % SIZE);
    row.abs_diff(goal_row) + col.abs_diff(goal_col)
}

/// Sum of [`tile_distance`] over every numbered tile.
pub fn manhattan_distance(puzzle: &Puzzle) -> usize {
    puzzle
        .tiles()
        .iter()
        .enumerate()
        .map(|(i, &tile)| tile_distance(tile, i))
        .sum()
}

/// Total cost after one move, given the cost before it.
///
/// `from` is the index the moved tile left (the blank's new position) and
/// `to` the index it landed on (the blank's old position). Only that tile's
/// distance changes, and the move itself costs one.
pub fn step_cost(cost: usize, tile: u32, from: usize, to: usize) -> usize {
    cost + tile_distance(tile, to) + 1 - tile_distance(tile, from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Move;

    #[test]
    fn goal_has_zero_estimate() {
        assert_eq!(manhattan_distance(&Puzzle::goal()), 0);
    }

    #[test]
    fn tile_distance_counts_rows_and_columns() {
        // tile 1 belongs at index 0
        assert_eq!(tile_distance(1, 0), 0);
        assert_eq!(tile_distance(1, 15), 6);
        // tile 4 belongs at index 3; index 4 is the next row's first column
        assert_eq!(tile_distance(4, 4), 4);
        assert_eq!(tile_distance(BLANK, 7), 0);
    }

    #[test]
    fn corner_swap_estimate() {
        let tiles = [15, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 1, 0];
        let puzzle = Puzzle::from_tiles(&tiles).unwrap();
        // 15 at index 0 and 1 at index 14 are each three rows and two columns out
        assert_eq!(manhattan_distance(&puzzle), 10);
    }

    #[test]
    fn step_cost_matches_full_recount() {
        let mut puzzle = Puzzle::goal();
        let mut cost = 0;
        for (moves, dir) in [Move::Up, Move::Left, Move::Up, Move::Right, Move::Down]
            .into_iter()
            .enumerate()
        {
            let old_space = puzzle.space_index();
            assert!(puzzle.apply_move(dir));
            let tile = puzzle.tile_at(old_space);
            cost = step_cost(cost, tile, puzzle.space_index(), old_space);
            assert_eq!(cost, moves + 1 + manhattan_distance(&puzzle));
        }
    }
}
