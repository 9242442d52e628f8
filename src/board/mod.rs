//! Board representation for run-scoring N×N games

pub mod bitboard;
pub mod board;
pub mod error;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, ScopedStone};
pub use error::BoardError;

/// Smallest playable board (a 3-run must fit)
pub const MIN_BOARD_SIZE: usize = 3;
/// Largest board; row labels stay single letters (A-Z)
pub const MAX_BOARD_SIZE: usize = 26;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    /// Human player, drawn as `X`
    Human,
    /// Automated player, drawn as `O`
    Ai,
}

impl Stone {
    /// Character used in text boards and on the grid
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Human => 'X',
            Stone::Ai => 'O',
            Stone::Empty => '.',
        }
    }

    /// Parse a cell character. Both `.` and space read as empty.
    pub fn from_symbol(ch: char) -> Option<Stone> {
        match ch {
            'X' | 'x' => Some(Stone::Human),
            'O' | 'o' => Some(Stone::Ai),
            '.' | ' ' => Some(Stone::Empty),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat row-major index on a board of side `size`
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Row letter plus 1-based column, e.g. `A1` or `C3`
    pub fn label(self) -> String {
        let letter = char::from_u32('A' as u32 + self.row as u32).unwrap_or('?');
        format!("{}{}", letter, self.col as u32 + 1)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
