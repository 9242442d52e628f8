//! Run-scoring N×N board game engine
//!
//! Two players alternately mark cells of an N×N grid (3 ≤ N ≤ 26). When the
//! grid is full, every maximal straight run of three or more marks scores
//! one point plus one point for each mark beyond three. The human plays `X`
//! and moves first; the engine plays `O`.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with per-player bitboards
//! - [`eval`]: Run counting and scoring
//! - [`search`]: Minimax with alpha-beta pruning and a memoization cache
//! - [`engine`]: Iterative-deepening move selection with an adaptive depth range
//! - [`ui`]: egui desktop front end
//!
//! # Quick Start
//!
//! ```
//! use runline::{evaluate, select_best_move, Board, Pos, Stone};
//!
//! let mut board = Board::new(3).unwrap();
//! board.place_stone(Pos::new(1, 1), Stone::Human);
//!
//! // AI responds as O
//! if let Some(pos) = select_best_move(&board) {
//!     board.place_stone(pos, Stone::Ai);
//!     println!("AI plays at {pos}");
//! }
//!
//! let eval = evaluate(&board);
//! println!("AI {} - You {}", eval.ai, eval.human);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use engine::{select_best_move, AIEngine, DepthSchedule, MoveResult};
pub use eval::{evaluate, Evaluation};
