//! Move selection for the automated player
//!
//! The engine runs an iterative-deepening loop over a depth range chosen
//! from the number of empty cells. At every depth each empty cell is tried
//! in row-major order as the AI's move and scored by minimax with the human
//! to reply. The best score is tracked across the whole call; a later move
//! replaces it only when strictly better, so the first move found in
//! row-major, ascending-depth order wins ties.
//!
//! # Example
//!
//! ```
//! use runline::{AIEngine, Board, Pos};
//!
//! let board = Board::from_rows(&["OO.", "X..", "X.."]).unwrap();
//! let mut engine = AIEngine::new();
//!
//! let result = engine.get_move_with_stats(&board);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! println!("Score: {:?}, nodes: {}", result.score, result.stats.nodes);
//! ```

use std::ops::Range;
use std::time::Instant;

use log::{debug, info, trace, warn};

use crate::board::{Board, Pos, Stone};
use crate::search::{SearchStats, Searcher, SCORE_INF};

/// Depth range used when the empty-cell count is at most `max_empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthTier {
    pub max_empty: usize,
    pub depths: Range<u8>,
}

/// Maps the number of empty cells to the depth range to iterate.
///
/// Tiers are checked in order; the first whose `max_empty` covers the count
/// wins, otherwise `fallback` applies. Ranges exclude their upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthSchedule {
    pub tiers: Vec<DepthTier>,
    pub fallback: Range<u8>,
}

impl Default for DepthSchedule {
    /// | empty cells | depths |
    /// |---|---|
    /// | ≤ 16 | 4, 5 |
    /// | 17–24 | 3, 4 |
    /// | 25–60 | 2, 3, 4 |
    /// | > 60 | 1, 2, 3, 4 |
    fn default() -> Self {
        Self {
            tiers: vec![
                DepthTier { max_empty: 16, depths: 4..6 },
                DepthTier { max_empty: 24, depths: 3..5 },
                DepthTier { max_empty: 60, depths: 2..5 },
            ],
            fallback: 1..5,
        }
    }
}

impl DepthSchedule {
    /// Use the same depth range regardless of board emptiness.
    #[must_use]
    pub fn fixed(depths: Range<u8>) -> Self {
        Self {
            tiers: Vec::new(),
            fallback: depths,
        }
    }

    /// Depth range for a position with `empty` empty cells.
    #[must_use]
    pub fn depths_for(&self, empty: usize) -> Range<u8> {
        self.tiers
            .iter()
            .find(|tier| empty <= tier.max_empty)
            .map_or(self.fallback.clone(), |tier| tier.depths.clone())
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, or `None` when the board is full
    pub best_move: Option<Pos>,
    /// Minimax score of `best_move`
    pub score: Option<i32>,
    /// Depth range that was iterated
    pub depths: Range<u8>,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search counters
    pub stats: SearchStats,
}

impl MoveResult {
    /// Result for a board without empty cells
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: None,
            depths: 0..0,
            time_ms,
            stats: SearchStats::default(),
        }
    }
}

/// Move selector for the AI (`O`) player.
///
/// # Example
///
/// ```
/// use runline::engine::DepthSchedule;
/// use runline::{AIEngine, Board};
///
/// let board = Board::new(4).unwrap();
/// let mut engine = AIEngine::with_schedule(DepthSchedule::fixed(1..3));
/// assert!(engine.get_move(&board).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    schedule: DepthSchedule,
}

impl AIEngine {
    /// Create an engine using [`DepthSchedule::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom depth schedule.
    #[must_use]
    pub fn with_schedule(schedule: DepthSchedule) -> Self {
        Self { schedule }
    }

    /// Get the best move for the AI, or `None` if the board is full.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// `board` is left untouched; the search explores a private copy.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        let candidates = board.empty_cells();
        if candidates.is_empty() {
            debug!("no empty cells, nothing to search");
            return MoveResult::no_move(start.elapsed().as_millis() as u64);
        }

        let depths = self.schedule.depths_for(candidates.len());
        debug!(
            "{} empty cells, searching depths {}..{}",
            candidates.len(),
            depths.start,
            depths.end
        );

        // One cache for the whole computation; keys carry the depth.
        let mut searcher = Searcher::new();
        let mut work_board = board.clone();
        let mut best: Option<(Pos, i32)> = None;

        for depth in depths.clone() {
            for &pos in &candidates {
                let score = {
                    let mut child = work_board.place_scoped(pos, Stone::Ai);
                    searcher.minimax(&mut child, depth, -SCORE_INF, SCORE_INF, false)
                };
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((pos, score));
                }
            }

            if let Some((pos, score)) = best {
                debug!(
                    "depth {depth}: best {pos} score {score} ({} nodes)",
                    searcher.stats().nodes
                );
            }
        }

        // An empty depth range scores nothing; fall back to the static value
        // of the first empty cell so a move is still returned.
        if best.is_none() {
            let pos = candidates[0];
            warn!("depth range {depths:?} is empty, scoring {pos} at depth 0");
            let score = {
                let mut child = work_board.place_scoped(pos, Stone::Ai);
                searcher.minimax(&mut child, 0, -SCORE_INF, SCORE_INF, false)
            };
            best = Some((pos, score));
        }

        let time_ms = start.elapsed().as_millis() as u64;
        let stats = searcher.stats();
        trace!("cache: {:?}", searcher.cache_stats());

        if let Some((pos, score)) = best {
            info!(
                "selected {pos} (score {score}, {} nodes, {} cache hits) in {time_ms}ms",
                stats.nodes, stats.cache_hits
            );
        }

        MoveResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map(|(_, score)| score),
            depths,
            time_ms,
            stats,
        }
    }
}

/// Choose a move for the AI with the default depth schedule.
///
/// Returns `None` when no empty cell remains; the caller must not apply
/// anything in that case.
#[must_use]
pub fn select_best_move(board: &Board) -> Option<Pos> {
    AIEngine::new().get_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_default_schedule_table() {
        let schedule = DepthSchedule::default();
        assert_eq!(schedule.depths_for(0), 4..6);
        assert_eq!(schedule.depths_for(16), 4..6);
        assert_eq!(schedule.depths_for(17), 3..5);
        assert_eq!(schedule.depths_for(24), 3..5);
        assert_eq!(schedule.depths_for(25), 2..5);
        assert_eq!(schedule.depths_for(60), 2..5);
        assert_eq!(schedule.depths_for(61), 1..5);
        assert_eq!(schedule.depths_for(676), 1..5);
    }

    #[test]
    fn test_fixed_schedule() {
        let schedule = DepthSchedule::fixed(2..3);
        assert_eq!(schedule.depths_for(1), 2..3);
        assert_eq!(schedule.depths_for(500), 2..3);
    }

    #[test]
    fn test_full_board_returns_no_move() {
        let full = board(&["XOX", "OXO", "OXO"]);
        let result = AIEngine::new().get_move_with_stats(&full);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, None);
        assert_eq!(select_best_move(&full), None);
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let one_left = board(&["XOX", "OX.", "OXO"]);
        assert_eq!(select_best_move(&one_left), Some(Pos::new(1, 2)));

        let mut engine = AIEngine::with_schedule(DepthSchedule::fixed(1..4));
        assert_eq!(engine.get_move(&one_left), Some(Pos::new(1, 2)));
    }

    #[test]
    fn test_empty_depth_range_still_moves() {
        let one_left = board(&["XOX", "OX.", "OXO"]);
        for depths in [3..3, 5..2] {
            let mut engine = AIEngine::with_schedule(DepthSchedule::fixed(depths));
            assert_eq!(engine.get_move(&one_left), Some(Pos::new(1, 2)));
        }

        let mut engine = AIEngine::with_schedule(DepthSchedule::fixed(0..0));
        let result = engine.get_move_with_stats(&board(&["OO.", "X..", "X.."]));
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, Some(1));
    }

    #[test]
    fn test_completes_own_row() {
        let mut engine = AIEngine::with_schedule(DepthSchedule::fixed(1..2));
        let result = engine.get_move_with_stats(&board(&["OO.", "X..", "X.."]));
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, Some(1));
    }

    #[test]
    fn test_blocks_human_row() {
        let mut engine = AIEngine::with_schedule(DepthSchedule::fixed(1..2));
        let result = engine.get_move_with_stats(&board(&["X.X", "O..", "..O"]));
        assert_eq!(result.best_move, Some(Pos::new(0, 1)));
        assert_eq!(result.score, Some(0));
    }

    #[test]
    fn test_ties_go_to_first_row_major_move() {
        // Nothing can score within one reply, so every move ties at 0
        let mut engine = AIEngine::with_schedule(DepthSchedule::fixed(1..2));
        let result = engine.get_move_with_stats(&Board::new(5).unwrap());
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
        assert_eq!(result.score, Some(0));
    }

    #[test]
    fn test_caller_board_untouched() {
        let original = board(&["X...", ".O..", "....", "...X"]);
        let copy = original.clone();
        let _ = AIEngine::new().get_move_with_stats(&original);
        assert_eq!(original, copy);
    }

    #[test]
    fn test_result_reports_depths_and_stats() {
        let result = AIEngine::new().get_move_with_stats(&board(&["X..", "...", "..."]));
        assert_eq!(result.depths, 4..6);
        assert!(result.stats.nodes > 0);
        assert!(result.stats.cache_hits > 0);
    }

    #[test]
    fn test_self_play_fills_board() {
        // Human takes the first empty cell, AI answers with the engine
        let mut game = Board::new(3).unwrap();
        let mut engine = AIEngine::new();
        while !game.is_full() {
            let human = game.empty_cells()[0];
            game.place_stone(human, Stone::Human);
            if game.is_full() {
                break;
            }
            let ai = engine.get_move(&game).unwrap();
            assert!(game.is_empty(ai));
            game.place_stone(ai, Stone::Ai);
        }
        let eval = evaluate(&game);
        assert_eq!(eval.net, eval.ai - eval.human);
    }
}
