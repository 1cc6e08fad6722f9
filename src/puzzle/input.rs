//! Parsing of comma-delimited board descriptions.
//!
//! The input format is the flat tile list, e.g. `1,2,5,3,4,0,6,7,8`; the
//! board size is derived as the integer square root of the tile count, and
//! [`Board::new`] then rejects anything that is not a square permutation.

use crate::puzzle::board::{Board, InvalidConfiguration};

/// Parses a comma-delimited tile list into a board.
///
/// Surrounding whitespace per tile is tolerated.
///
/// # Errors
///
/// Returns [`InvalidConfiguration`] when a tile is not a non-negative
/// integer, or when the tile list fails board validation (count not a
/// perfect square of an n >= 2, or not a permutation of `0..n*n`).
pub fn parse_board(input: &str) -> Result<Board, InvalidConfiguration> {
    let tiles = input
        .split(',')
        .map(|token| token.trim().parse::<u32>())
        .collect::<Result<Vec<u32>, _>>()
        .map_err(|e| InvalidConfiguration::new(format!("malformed tile list: {e}")))?;

    let n = tiles.len().isqrt();
    Board::new(tiles, n)
}
