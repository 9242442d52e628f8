//! Memoization cache for minimax scores
//!
//! Scores are keyed by the exact board contents together with the remaining
//! depth and the side to move, so a shallow result is never reused for a
//! deeper search of the same layout. Each entry records how the stored score
//! relates to the true minimax value (exact, lower bound or upper bound), and
//! a probe only answers when that relation settles the current window.
//!
//! # Example
//!
//! ```
//! use runline::board::Board;
//! use runline::search::{EntryType, MemoCache, SearchKey};
//!
//! let board = Board::new(3).unwrap();
//! let mut cache = MemoCache::new();
//!
//! let key = SearchKey::new(&board, 2, true);
//! cache.store(key.clone(), 4, EntryType::LowerBound);
//!
//! // A lower bound of 4 settles a window whose beta is 4 or less
//! assert_eq!(cache.probe(&key, 0, 3), Some(4));
//! assert_eq!(cache.probe(&key, 0, 10), None);
//! ```

use std::collections::HashMap;

use crate::board::Board;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - every child was searched inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Canonical snapshot of a search node.
///
/// Two boards of the same size with the same stones always produce equal
/// keys; boards of different sizes never do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    size: u8,
    depth: u8,
    maximizing: bool,
    /// Human words followed by AI words
    cells: Box<[u64]>,
}

impl SearchKey {
    #[must_use]
    pub fn new(board: &Board, depth: u8, maximizing: bool) -> Self {
        let cells = board
            .human
            .words()
            .iter()
            .chain(board.ai.words())
            .copied()
            .collect();
        Self {
            size: board.size() as u8,
            depth,
            maximizing,
            cells,
        }
    }

    /// Remaining depth stored in the key
    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }
}

/// Cached score for one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub score: i32,
    pub entry_type: EntryType,
}

/// Score cache owned by one top-level move computation.
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: HashMap<SearchKey, CacheEntry>,
    probes: u64,
    hits: u64,
}

impl MemoCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the cache for a node.
    ///
    /// Returns the stored score only if it is usable for the window
    /// `(alpha, beta)`: always for exact entries, for lower bounds at or
    /// above `beta`, and for upper bounds at or below `alpha`.
    pub fn probe(&mut self, key: &SearchKey, alpha: i32, beta: i32) -> Option<i32> {
        self.probes += 1;
        let entry = self.entries.get(key)?;

        let usable = match entry.entry_type {
            EntryType::Exact => true,
            EntryType::LowerBound => entry.score >= beta,
            EntryType::UpperBound => entry.score <= alpha,
        };
        if usable {
            self.hits += 1;
            Some(entry.score)
        } else {
            None
        }
    }

    /// Look up an entry without touching the statistics.
    #[must_use]
    pub fn get(&self, key: &SearchKey) -> Option<CacheEntry> {
        self.entries.get(key).copied()
    }

    /// Store a score. Exact entries are never downgraded to bounds.
    pub fn store(&mut self, key: SearchKey, score: i32, entry_type: EntryType) {
        let entry = CacheEntry { score, entry_type };
        match self.entries.get(&key) {
            Some(existing)
                if existing.entry_type == EntryType::Exact && entry_type != EntryType::Exact => {}
            _ => {
                self.entries.insert(key, entry);
            }
        }
    }

    /// Clear all entries and statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.probes = 0;
        self.hits = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get statistics about cache usage.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            probes: self.probes,
            hits: self.hits,
        }
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of stored nodes
    pub entries: usize,
    /// Total lookups
    pub probes: u64,
    /// Lookups that returned a usable score
    pub hits: u64,
}

impl CacheStats {
    /// Hit rate in percent
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64 * 100.0
        }
    }
}
