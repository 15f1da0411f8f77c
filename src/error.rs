//! Typed failures for board construction and solving.

use std::fmt;

use crate::solver::SearchStats;

/// Failure while building a board from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Fewer tile values were supplied than the board has cells.
    SizeMismatch { expected: usize, found: usize },
    /// A token in textual input is not a non-negative integer.
    Parse { line: usize, token: String },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, found } => {
                write!(f, "expected {expected} tiles, got {found} instead")
            }
            Self::Parse { line, token } => {
                write!(f, "line {line}: '{token}' is not a tile value")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Reasons a solve call ends without a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The tiles are not a permutation of `0..16`.
    InvalidPermutation,
    /// The parity check rules the board out; no search was attempted.
    Unsolvable,
    /// The frontier ran dry on a board that passed the parity check.
    ///
    /// This should be unreachable and indicates a bug in the engine.
    ExhaustedFrontier { stats: SearchStats },
    /// The caller's cap on recorded arrangements was reached first.
    StateLimit { limit: usize, stats: SearchStats },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPermutation => {
                write!(f, "board is not a permutation of the tiles 0..15")
            }
            Self::Unsolvable => write!(f, "puzzle is not solvable"),
            Self::ExhaustedFrontier { stats } => write!(
                f,
                "frontier exhausted after {} states ({} expanded) without reaching the goal",
                stats.explored, stats.expanded
            ),
            Self::StateLimit { limit, stats } => write!(
                f,
                "gave up after recording {} states (limit {limit})",
                stats.explored
            ),
        }
    }
}

impl std::error::Error for SolveError {}
