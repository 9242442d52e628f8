//! Evaluation module for run-scoring positions
//!
//! The evaluation counts maximal runs of each player's marks along the
//! four line directions. It is both the leaf value of the search and the
//! final scoring rule once the board is full.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, run_length, Evaluation};
pub use patterns::{run_points, RunScore, DIRECTIONS};
