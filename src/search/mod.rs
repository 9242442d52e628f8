//! Search module
//!
//! Contains:
//! - Memoization cache keyed by board contents, depth and side to move
//! - Minimax with alpha-beta pruning

pub mod cache;
pub mod minimax;

pub use cache::{CacheEntry, CacheStats, EntryType, MemoCache, SearchKey};
pub use minimax::{SearchStats, Searcher, SCORE_INF};
