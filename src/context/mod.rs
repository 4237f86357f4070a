// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration and the mutable context threaded through a search.
//!
//! The [`SearchContext`] is the data structure the engine, the successor
//! generator and the estimator share while sorting one input:
//! - [`SearchConfig`]: the tunables, fixed for the whole run
//! - [`Statistics`]: counters accumulated across all chunks
//! - [`RotationCache`]: memoized insertion points, scoped to one chunk search
//!
//! Each sort owns its own context, so independent runs never share state.

use crate::estimator::cache::RotationCache;
use crate::machine::constants::MAX_CHUNK_SIZE;
use crate::machine::MoveSet;
use crate::state::statistics::Statistics;

/// Tunables for the chunked search.
///
/// # Example
///
/// ```
/// use pushswap_search::context::SearchConfig;
/// use pushswap_search::machine::MoveSet;
///
/// let config = SearchConfig::default()
///     .with_max_chunk_size(5)
///     .with_allowed_moves(MoveSet::SINGLES)
///     .with_local_swaps(false);
/// assert_eq!(config.max_chunk_size, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound on the number of values in one chunk.
    pub max_chunk_size: usize,
    /// Moves the successor generator may try.
    pub allowed_moves: MoveSet,
    /// Apply the greedy head swaps after each generated move.
    pub local_swaps: bool,
}

impl SearchConfig {
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn with_max_chunk_size(mut self, size: usize) -> Self {
        assert!(size >= 1, "Chunk size must be at least 1, got {}", size);
        self.max_chunk_size = size;
        self
    }

    pub fn with_allowed_moves(mut self, moves: MoveSet) -> Self {
        self.allowed_moves = moves;
        self
    }

    pub fn with_local_swaps(mut self, enabled: bool) -> Self {
        self.local_swaps = enabled;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: MAX_CHUNK_SIZE,
            allowed_moves: MoveSet::MIXED,
            local_swaps: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct SearchContext {
    pub config: SearchConfig,
    pub statistics: Statistics,
    pub rotations: RotationCache,
}

impl SearchContext {
    /// Create a context with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}
