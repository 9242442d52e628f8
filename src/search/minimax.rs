//! Depth-limited minimax with alpha-beta pruning and memoization
//!
//! The AI (`O`) is the maximizing side and the human (`X`) the minimizing
//! side. Leaves are scored with the net run evaluation. Children are visited
//! in row-major order of the empty cells; each move is placed on the shared
//! board, searched, and removed again when its scope ends.
//!
//! # Example
//!
//! ```
//! use runline::board::Board;
//! use runline::search::{Searcher, SCORE_INF};
//!
//! let mut board = Board::from_rows(&["OO.", "XX.", "..."]).unwrap();
//! let mut searcher = Searcher::new();
//!
//! // AI to move: completing the top row is worth one point, and the
//! // human then completes the middle row.
//! let score = searcher.minimax(&mut board, 2, -SCORE_INF, SCORE_INF, true);
//! assert_eq!(score, 0);
//! ```

use log::trace;

use crate::board::{Board, Stone};
use crate::eval::evaluate;

use super::cache::{CacheStats, EntryType, MemoCache, SearchKey};

/// Infinity score for alpha-beta bounds. No evaluation reaches it.
pub const SCORE_INF: i32 = i32::MAX;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered (including cache hits)
    pub nodes: u64,
    /// Leaves scored by the evaluator
    pub leaf_evals: u64,
    /// Sibling loops cut short by pruning
    pub cutoffs: u64,
    /// Cache lookups
    pub cache_probes: u64,
    /// Cache lookups that returned a score
    pub cache_hits: u64,
}

/// Minimax searcher holding the memoization cache for one move computation.
#[derive(Debug, Default)]
pub struct Searcher {
    cache: MemoCache,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `board` with `depth` plies left.
    ///
    /// `maximizing` is true when the AI is to move. The board is mutated
    /// during the call and restored before it returns.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        let key = SearchKey::new(board, depth, maximizing);
        if let Some(score) = self.cache.probe(&key, alpha, beta) {
            return score;
        }

        if depth == 0 || board.is_full() {
            self.stats.leaf_evals += 1;
            let score = evaluate(board).net;
            self.cache.store(key, score, EntryType::Exact);
            return score;
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let stone = if maximizing { Stone::Ai } else { Stone::Human };
        let mut best_score = if maximizing { -SCORE_INF } else { SCORE_INF };

        for pos in board.empty_cells() {
            let score = {
                let mut child = board.place_scoped(pos, stone);
                self.minimax(&mut child, depth - 1, alpha, beta, !maximizing)
            };

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(best_score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let entry_type = if best_score <= alpha_orig {
            EntryType::UpperBound
        } else if best_score >= beta_orig {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.cache.store(key, best_score, entry_type);

        best_score
    }

    /// Get search statistics, including cache counters.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        let cache = self.cache.stats();
        SearchStats {
            cache_probes: cache.probes,
            cache_hits: cache.hits,
            ..self.stats
        }
    }

    /// Get statistics about the memoization cache.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Clear the cache and counters.
    pub fn clear(&mut self) {
        trace!("clearing cache: {:?}", self.cache.stats());
        self.cache.clear();
        self.stats = SearchStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    /// Plain minimax over the same leaves: no pruning, no cache.
    fn exhaustive(board: &mut Board, depth: u8, maximizing: bool) -> i32 {
        if depth == 0 || board.is_full() {
            return evaluate(board).net;
        }
        let stone = if maximizing { Stone::Ai } else { Stone::Human };
        let scores = board.empty_cells().into_iter().map(|pos| {
            let mut child = board.place_scoped(pos, stone);
            exhaustive(&mut child, depth - 1, !maximizing)
        });
        let scores: Vec<i32> = scores.collect();
        if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    fn search(board: &mut Board, depth: u8, maximizing: bool) -> i32 {
        Searcher::new().minimax(board, depth, -SCORE_INF, SCORE_INF, maximizing)
    }

    #[test]
    fn test_depth_zero_is_evaluation() {
        let mut board = Board::from_rows(&["OOO", "X..", "X.."]).unwrap();
        assert_eq!(search(&mut board, 0, false), 1);
    }

    #[test]
    fn test_full_board_is_leaf() {
        let mut board = Board::from_rows(&["XOO", "XXO", "XOX"]).unwrap();
        let mut searcher = Searcher::new();
        let score = searcher.minimax(&mut board, 5, -SCORE_INF, SCORE_INF, true);
        assert_eq!(score, -2);
        assert_eq!(searcher.stats().leaf_evals, 1);
    }

    #[test]
    fn test_maximizer_completes_row() {
        let mut board = Board::from_rows(&["OO.", "X..", "X.."]).unwrap();
        assert_eq!(search(&mut board, 1, true), 1);
    }

    #[test]
    fn test_minimizer_completes_row() {
        let mut board = Board::from_rows(&["OO.", "XX.", "..."]).unwrap();
        assert_eq!(search(&mut board, 1, false), -1);
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::from_rows(&["X...", ".O..", "....", "...."]).unwrap();
        let before = board.clone();
        search(&mut board, 3, true);
        assert_eq!(board, before);
    }

    #[test]
    fn test_matches_exhaustive_minimax() {
        let positions: [&[&str]; 4] = [
            &["...", "...", "..."],
            &["X..", ".O.", "..."],
            &["XO.", ".X.", "O.."],
            &["OX..", ".XO.", "....", "X..O"],
        ];
        for rows in positions {
            for depth in 1..=4 {
                for maximizing in [true, false] {
                    let mut board = Board::from_rows(rows).unwrap();
                    let expected = exhaustive(&mut board, depth, maximizing);
                    let actual = search(&mut board, depth, maximizing);
                    assert_eq!(actual, expected, "{rows:?} depth {depth} max {maximizing}");
                }
            }
        }
    }

    #[test]
    fn test_shared_cache_matches_fresh_search() {
        // One searcher reused across depths must agree with fresh ones.
        let mut board = Board::from_rows(&["X..", "...", "..O"]).unwrap();
        let mut shared = Searcher::new();
        for depth in 1..=5 {
            for pos in board.empty_cells() {
                let mut child = board.place_scoped(pos, Stone::Ai);
                let reused = shared.minimax(&mut child, depth, -SCORE_INF, SCORE_INF, false);
                let fresh = search(&mut child, depth, false);
                assert_eq!(reused, fresh, "{pos} depth {depth}");
            }
        }
        assert!(shared.stats().cache_hits > 0);
    }

    #[test]
    fn test_pruning_reduces_nodes() {
        let mut board = Board::from_rows(&["X...", "....", "....", "...O"]).unwrap();
        let mut searcher = Searcher::new();
        searcher.minimax(&mut board, 3, -SCORE_INF, SCORE_INF, true);
        let stats = searcher.stats();
        assert!(stats.cutoffs > 0);
        // 14 * 13 * 12 leaves without pruning
        assert!(stats.leaf_evals < 14 * 13 * 12);
    }

    #[test]
    fn test_clear_resets_stats() {
        let mut board = Board::new(3).unwrap();
        let mut searcher = Searcher::new();
        searcher.minimax(&mut board, 2, -SCORE_INF, SCORE_INF, true);
        assert!(searcher.stats().nodes > 0);
        assert!(searcher.cache_stats().entries > 0);

        searcher.clear();
        assert_eq!(searcher.stats(), SearchStats::default());
        assert_eq!(board.get(Pos::new(0, 0)), Stone::Empty);
    }
}
