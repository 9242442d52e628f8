//! Error types for board construction and checked placement.

use derive_more::{Display, Error};

use super::Pos;

/// Error returned by fallible board operations
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Requested side length is outside the supported range
    #[display("board size {size} is not supported (expected {min} to {max})")]
    InvalidSize { size: usize, min: usize, max: usize },

    /// Coordinate lies outside the grid
    #[display("cell {pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },

    /// Target cell already holds a stone
    #[display("cell {pos} is already occupied")]
    Occupied { pos: Pos },

    /// Unknown character in a textual board
    #[display("invalid cell character {ch:?} in row {row}")]
    InvalidCell { ch: char, row: usize },

    /// Textual board is not square
    #[display("row {row} has {len} cells, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },
}
