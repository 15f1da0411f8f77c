//! Solver for the 4x4 sliding fifteen puzzle.
//!
//! Boards are checked with a parity test before an A* search over blank
//! moves, guided by the Manhattan distance of every tile to its goal cell.

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod input;
pub mod puzzle;
pub mod solver;

pub use error::{PuzzleError, SolveError};
pub use puzzle::{Move, Puzzle, BLANK, SIZE, TILE_COUNT};
pub use solver::{a_star, a_star_bounded, solve, solve_bounded, SearchStats, Solution};
