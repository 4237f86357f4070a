// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the search context and incremented by the
//! engine and the successor generator as they expand, prune and solve.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counter {
    /// States taken from the queue and expanded.
    Expanded,
    /// Successor states pushed onto the queue.
    Generated,
    /// States popped again after an identical configuration was expanded.
    Duplicates,
    /// Moves skipped because they undo the previous move.
    InverseRejected,
    /// Pushes of values outside the chunk, and swaps of A not confined to it.
    ChunkRejected,
    /// Pulls that would split the already-sorted region.
    BoundaryRejected,
    /// Moves whose buffer precondition failed.
    FailedMoves,
    /// Successors discarded because their estimate was invalid.
    InvalidEstimates,
    /// Greedy swaps applied after a move.
    LocalSwaps,
    ChunksSolved,
    CacheHits,
    CacheMisses,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counter::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    /// Add `n` to the specified counter.
    pub fn add(&mut self, counter: Counter, n: u64) {
        self.stats[counter as usize] += n;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }

    /// All counters with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Counter, u64)> + '_ {
        Counter::iter().map(move |c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = Statistics::new();
        stats.increment(Counter::Expanded);
        stats.increment(Counter::Expanded);
        stats.add(Counter::CacheHits, 5);
        assert_eq!(stats.get(Counter::Expanded), 2);
        assert_eq!(stats.get(Counter::CacheHits), 5);
        assert_eq!(stats.get(Counter::Generated), 0);
    }

    #[test]
    fn test_iter_covers_every_counter() {
        let stats = Statistics::new();
        let names: Vec<String> = stats.iter().map(|(c, _)| c.to_string()).collect();
        assert_eq!(names.len(), Counter::COUNT);
        assert_eq!(names[0], "Expanded");
        assert_eq!(names[Counter::COUNT - 1], "CacheMisses");
    }
}
