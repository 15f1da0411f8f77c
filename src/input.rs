//! Reading boards from text.

use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

/// Collects tile values from `text`.
///
/// Values may be split by whitespace or commas and span any number of
/// lines; `[` and `]` are ignored so fingerprints parse back. Blank lines and
/// lines starting with `#` are skipped.
pub fn parse_tiles(text: &str) -> Result<Vec<u32>, PuzzleError> {
    let mut tiles = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
            .filter(|t| !t.is_empty())
        {
            let tile = token.parse::<u32>().map_err(|_| PuzzleError::Parse {
                line: n + 1,
                token: token.to_string(),
            })?;
            tiles.push(tile);
        }
    }
    Ok(tiles)
}

/// Parses `text` and builds a board from it.
///
/// The result still has to pass [`Puzzle::is_valid`].
pub fn parse_board(text: &str) -> Result<Puzzle, PuzzleError> {
    Puzzle::from_tiles(&parse_tiles(text)?)
}
