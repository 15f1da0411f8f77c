use rand::{seq::SliceRandom, thread_rng, Rng};
use std::fmt;

use crate::error::{PuzzleError, SolveError};
use crate::solver::{self, Solution};

/// Side length of the grid.
pub const SIZE: usize = 4;
/// Number of cells on the board, blank included.
pub const TILE_COUNT: usize = SIZE * SIZE;
/// The empty space is represented by 0.
pub const BLANK: u32 = 0;

/// Direction the blank travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

impl Move {
    /// Expansion order used by the search.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    /// Offset added to the blank's row-major index.
    pub fn offset(&self) -> isize {
        match self {
            Move::Left => -1,
            Move::Right => 1,
            Move::Up => -(SIZE as isize),
            Move::Down => SIZE as isize,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Down => Move::Up,
        }
    }

    fn is_horizontal(&self) -> bool {
        matches!(self, Move::Left | Move::Right)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Left => "left",
            Move::Right => "right",
            Move::Up => "up",
            Move::Down => "down",
        };
        write!(f, "{}", s)
    }
}

/// A 4x4 board in row-major order with a cached blank position.
///
/// The cache is only touched by [`Puzzle::apply_move`] and the constructors,
/// so `tiles[space] == BLANK` holds for every board built from a tile set
/// containing a blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    tiles: [u32; TILE_COUNT],
    space: usize,
}

impl Puzzle {
    /// The solved board: `1..=15` followed by the blank.
    pub fn goal() -> Self {
        let mut tiles = [BLANK; TILE_COUNT];
        for (i, tile) in tiles.iter_mut().take(TILE_COUNT - 1).enumerate() {
            *tile = i as u32 + 1;
        }
        Self {
            tiles,
            space: TILE_COUNT - 1,
        }
    }

    /// Builds a board from the first 16 values of `tiles`.
    ///
    /// Only the count is checked here; call [`Puzzle::is_valid`] before
    /// handing the board to the solver. Values past the sixteenth are ignored.
    pub fn from_tiles(tiles: &[u32]) -> Result<Self, PuzzleError> {
        if tiles.len() < TILE_COUNT {
            return Err(PuzzleError::SizeMismatch {
                expected: TILE_COUNT,
                found: tiles.len(),
            });
        }
        let mut board = [BLANK; TILE_COUNT];
        board.copy_from_slice(&tiles[..TILE_COUNT]);
        Ok(Self::with_tiles(board))
    }

    /// Uniform shuffle of the goal tiles over every cell.
    ///
    /// Half of the results cannot be solved; gate with [`Puzzle::is_solvable`].
    pub fn random() -> Self {
        Self::random_with(&mut thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles = Self::goal().tiles;
        tiles.shuffle(rng);
        Self::with_tiles(tiles)
    }

    fn with_tiles(tiles: [u32; TILE_COUNT]) -> Self {
        // A board without a blank fails `is_valid`; index 0 keeps moves in bounds.
        let space = tiles.iter().position(|&t| t == BLANK).unwrap_or(0);
        Self { tiles, space }
    }

    pub fn tiles(&self) -> &[u32; TILE_COUNT] {
        &self.tiles
    }

    /// Tile at row-major `index`. Panics if `index >= TILE_COUNT`.
    pub fn tile_at(&self, index: usize) -> u32 {
        self.tiles[index]
    }

    pub fn space_index(&self) -> usize {
        self.space
    }

    /// True iff the tiles are a permutation of `0..16`.
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; TILE_COUNT];
        for &tile in &self.tiles {
            let Some(slot) = seen.get_mut(tile as usize) else {
                return false;
            };
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    /// Slides the blank one cell in `movement`, swapping it with that tile.
    ///
    /// Returns `false` and leaves the board untouched if the target is off
    /// the grid or, for horizontal moves, on another row.
    pub fn apply_move(&mut self, movement: Move) -> bool {
        let target = self.space as isize + movement.offset();
        if target < 0 || target >= TILE_COUNT as isize {
            return false;
        }
        let target = target as usize;
        if movement.is_horizontal() && target / SIZE != self.space / SIZE {
            return false;
        }

        self.tiles[self.space] = self.tiles[target];
        self.tiles[target] = BLANK;
        self.space = target;
        true
    }

    /// Copying probe: the board after `dir`, or `None` if the move is illegal.
    pub fn try_move(&self, dir: Move) -> Option<Self> {
        let mut new_puzzle = self.snapshot();
        if new_puzzle.apply_move(dir) {
            Some(new_puzzle)
        } else {
            None
        }
    }

    /// Independent copy of this board.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Canonical rendering of the tile sequence, e.g. `[1 2 ... 15 0]`.
    pub fn fingerprint(&self) -> String {
        let body = self
            .tiles
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        format!("[{body}]")
    }

    /// Blank in the last cell and every other tile strictly ascending.
    pub fn is_solved(&self) -> bool {
        let last = TILE_COUNT - 1;
        self.space == last
            && self.tiles[last] == BLANK
            && self.tiles[..last].windows(2).all(|w| w[0] < w[1])
    }

    /// Parity test for reachability of the goal.
    ///
    /// Solvable iff the blank sits on an even row with an odd inversion
    /// count, or on an odd row with an even count.
    pub fn is_solvable(&self) -> bool {
        let inversions = count_inversions(&self.tiles);
        let even_row = (self.space / SIZE) % 2 == 0;
        let even_inversions = inversions % 2 == 0;
        even_row != even_inversions
    }

    /// Checks validity and parity, then runs the A* search.
    pub fn solve(&self) -> Result<Solution, SolveError> {
        solver::solve(self)
    }
}

fn count_inversions(tiles: &[u32]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != BLANK)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != BLANK && next < val)
                .count()
        })
        .sum()
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(SIZE) {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
