//! N×N board with one bitboard per player

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{BoardError, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Game board. The side length is fixed for the lifetime of the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Human (`X`) stones bitboard
    pub human: Bitboard,
    /// AI (`O`) stones bitboard
    pub ai: Bitboard,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        let cells = size * size;
        Ok(Self {
            size,
            human: Bitboard::new(cells),
            ai: Bitboard::new(cells),
        })
    }

    /// Parse rows of `X`, `O` and `.` (or space). Row count sets the size.
    ///
    /// ```
    /// use runline::{Board, Pos, Stone};
    ///
    /// let board = Board::from_rows(&["XO.", "...", "..X"]).unwrap();
    /// assert_eq!(board.get(Pos::new(0, 1)), Stone::Ai);
    /// assert_eq!(board.empty_cells().len(), 6);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let mut board = Self::new(rows.len())?;
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != board.size {
                return Err(BoardError::RaggedRow {
                    row,
                    len,
                    size: board.size,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let stone = Stone::from_symbol(ch).ok_or(BoardError::InvalidCell { ch, row })?;
                board.place_stone(Pos::new(row as u8, col as u8), stone);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Whether `pos` addresses a cell of this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "position {:?} out of bounds for {}x{} board",
            pos,
            self.size,
            self.size
        );
        pos.to_index(self.size)
    }

    /// Get stone at position. Panics if `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.human.get(idx) {
            Stone::Human
        } else if self.ai.get(idx) {
            Stone::Ai
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Remove every stone.
    pub fn clear(&mut self) {
        let cells = self.cell_count();
        self.human = Bitboard::new(cells);
        self.ai = Bitboard::new(cells);
    }

    /// Place a stone without checking occupancy.
    /// Placing `Stone::Empty` clears the cell.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        match stone {
            Stone::Human => {
                self.ai.clear(idx);
                self.human.set(idx);
            }
            Stone::Ai => {
                self.human.clear(idx);
                self.ai.set(idx);
            }
            Stone::Empty => {
                self.human.clear(idx);
                self.ai.clear(idx);
            }
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Place a stone after checking bounds and occupancy.
    pub fn try_place(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds {
                pos,
                size: self.size,
            });
        }
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied { pos });
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the board, so it can be handed to a
    /// recursive search; the cell is emptied again when the guard drops.
    #[inline]
    pub fn place_scoped(&mut self, pos: Pos, stone: Stone) -> ScopedStone<'_> {
        debug_assert!(self.is_empty(pos), "scoped placement on occupied {pos:?}");
        self.place_stone(pos, stone);
        ScopedStone { board: self, pos }
    }

    /// Get bitboard for a player (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Human => Some(&self.human),
            Stone::Ai => Some(&self.ai),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        (self.human.count() + self.ai.count()) as usize
    }

    /// True iff no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == self.cell_count()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.human.is_empty() && self.ai.is_empty()
    }

    /// Every empty cell in row-major order.
    ///
    /// Search order and tie-breaking both follow this order.
    pub fn empty_cells(&self) -> Vec<Pos> {
        let mut cells = Vec::with_capacity(self.cell_count() - self.stone_count());
        for idx in 0..self.cell_count() {
            if !self.human.get(idx) && !self.ai.get(idx) {
                cells.push(Pos::from_index(idx, self.size));
            }
        }
        cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}", self.get(Pos::new(row as u8, col as u8)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A stone placed by [`Board::place_scoped`]; removed on drop.
pub struct ScopedStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Deref for ScopedStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedStone<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}
