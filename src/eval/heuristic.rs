//! Heuristic evaluation of a board by directional runs
//!
//! For every stone and each of the four line directions, the maximal run
//! that *starts* at that stone (the previous cell in that direction is not
//! the same player's) is measured. Runs of three or more score
//! [`run_points`] for their owner. Each physical line is therefore counted
//! exactly once per direction.

use crate::board::{Board, Pos, Stone};

use super::patterns::{run_points, DIRECTIONS};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// `ai - human`: the value minimax maximizes
    pub net: i32,
    /// Human (`X`) run total
    pub human: i32,
    /// AI (`O`) run total
    pub ai: i32,
}

impl Evaluation {
    /// Run total for one player
    #[inline]
    pub fn total(&self, stone: Stone) -> i32 {
        match stone {
            Stone::Human => self.human,
            Stone::Ai => self.ai,
            Stone::Empty => 0,
        }
    }

    /// Player with the higher total, or `None` on a tie
    pub fn winner(&self) -> Option<Stone> {
        match self.ai.cmp(&self.human) {
            std::cmp::Ordering::Greater => Some(Stone::Ai),
            std::cmp::Ordering::Less => Some(Stone::Human),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Evaluate the board.
///
/// Pure function of the board contents.
///
/// ```
/// use runline::{evaluate, Board};
///
/// let board = Board::from_rows(&["OOO", "X.X", "..."]).unwrap();
/// let eval = evaluate(&board);
/// assert_eq!((eval.net, eval.human, eval.ai), (1, 0, 1));
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> Evaluation {
    let human = score_runs(board, Stone::Human);
    let ai = score_runs(board, Stone::Ai);
    Evaluation {
        net: ai - human,
        human,
        ai,
    }
}

/// Sum run points for one player.
fn score_runs(board: &Board, stone: Stone) -> i32 {
    let Some(stones) = board.stones(stone) else {
        return 0;
    };
    let size = board.size();

    let mut score = 0;
    for idx in stones.iter_ones() {
        let pos = Pos::from_index(idx, size);
        for &(dr, dc) in &DIRECTIONS {
            if is_run_start(board, pos, dr, dc, stone) {
                score += run_points(run_length(board, pos, dr, dc, stone));
            }
        }
    }
    score
}

/// True when the cell behind `pos` along the direction is not `stone`.
#[inline]
fn is_run_start(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> bool {
    let r = pos.row as i32 - dr;
    let c = pos.col as i32 - dc;
    !Pos::is_valid(r, c, board.size()) || board.get(Pos::new(r as u8, c as u8)) != stone
}

/// Length of the contiguous run of `stone` from `pos` along `(dr, dc)`.
///
/// Includes `pos` itself; 0 if `pos` does not hold `stone`.
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    let size = board.size();
    let mut count = 0;
    let mut r = pos.row as i32;
    let mut c = pos.col as i32;
    while Pos::is_valid(r, c, size) && board.get(Pos::new(r as u8, c as u8)) == stone {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}
