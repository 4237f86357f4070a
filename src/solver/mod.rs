// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Chunk orchestration: the whole sort, one chunk search at a time.
//!
//! The sorted input is cut into chunks of consecutive values. Chunks are
//! solved in ascending order, each one anchored right after the maximum of
//! the chunk before it, so that A accumulates one growing cyclic sorted run.
//! Between chunks, A is rotated the short way to bring a value of the next
//! chunk to its head. A final rotation brings the global minimum to the top.
//!
//! Inputs of at most [`SMALL_SORT_LIMIT`] values skip the search entirely.
//!
//! # Example
//!
//! ```
//! use pushswap_search::solver::sort_moves;
//! use pushswap_search::machine::Move;
//!
//! assert_eq!(sort_moves(&[2, 1, 3]), vec![Move::Sa]);
//! assert!(sort_moves(&[1, 2, 3, 4, 5, 6, 7, 8]).is_empty());
//! ```

pub mod small;

use crate::context::{SearchConfig, SearchContext};
use crate::engine::SearchEngine;
use crate::history::cancel_inverses;
use crate::machine::constants::SMALL_SORT_LIMIT;
use crate::machine::{Chunk, Move};
use crate::state::MachineState;
use rustc_hash::FxHashSet;
use std::rc::Rc;
use tracing::info;

/// Sorts whole inputs, keeping statistics across calls.
#[derive(Debug, Default)]
pub struct ChunkSorter {
    engine: SearchEngine,
    ctx: SearchContext,
}

impl ChunkSorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            engine: SearchEngine::new(),
            ctx: SearchContext::with_config(config),
        }
    }

    /// The context, with statistics accumulated over all sorts so far.
    pub fn context(&self) -> &SearchContext {
        &self.ctx
    }

    /// Moves that sort `values` (first value on top of A) into ascending
    /// order on A, with B empty.
    ///
    /// # Panics
    ///
    /// Panics if `values` contains duplicates.
    pub fn sort(&mut self, values: &[i32]) -> Vec<Move> {
        let mut seen = FxHashSet::default();
        if let Some(v) = values.iter().find(|&&v| !seen.insert(v)) {
            panic!("Duplicate value {} reached the sorter", v);
        }
        if values.windows(2).all(|w| w[0] < w[1]) {
            return Vec::new();
        }
        if values.len() <= SMALL_SORT_LIMIT {
            return cancel_inverses(&small::solve(values));
        }

        let chunks: Vec<Rc<Chunk>> = Chunk::partition(values, self.ctx.config.max_chunk_size)
            .into_iter()
            .map(Rc::new)
            .collect();
        info!(
            values = values.len(),
            chunks = chunks.len(),
            max_chunk_size = self.ctx.config.max_chunk_size,
            "partitioned input"
        );

        let mut state = MachineState::new(values, chunks[0].clone());
        let mut boundary = None;
        for (i, chunk) in chunks.iter().enumerate() {
            state.set_chunk(chunk.clone(), boundary);
            state = self.engine.search(state, &mut self.ctx);
            boundary = Some(chunk.max());
            if let Some(next) = chunks.get(i + 1) {
                align_head(&mut state, |v| next.contains(v));
            }
        }
        let min = chunks[0].min();
        align_head(&mut state, |v| v == min);

        let moves = cancel_inverses(&state.into_history().to_vec());
        info!(moves = moves.len(), "sorted");
        moves
    }
}

/// Sort `values` with the default configuration.
///
/// # Panics
///
/// Panics if `values` contains duplicates.
pub fn sort_moves(values: &[i32]) -> Vec<Move> {
    ChunkSorter::new().sort(values)
}

/// Rotate A the short way until its head satisfies `wanted`, choosing the
/// matching value closest to the head.
fn align_head(state: &mut MachineState, wanted: impl Fn(i32) -> bool) {
    let len = state.a().len();
    let Some(index) = (0..len)
        .filter(|&i| state.a().get(i).is_some_and(&wanted))
        .min_by_key(|&i| i.min(len - i))
    else {
        panic!("No value to align in A: {:?}", state);
    };
    let (m, count) = if index <= len - index {
        (Move::Ra, index)
    } else {
        (Move::Rra, len - index)
    };
    for _ in 0..count {
        if !state.apply(m) {
            panic!("Alignment rotation {} failed: {:?}", m, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{MoveSet, StackBuffer};
    use crate::state::statistics::Counter;

    fn replay(values: &[i32], moves: &[Move]) -> (Vec<i32>, bool) {
        let mut a = StackBuffer::from_slice(values.len(), values);
        let mut b = StackBuffer::with_capacity(values.len());
        for &m in moves {
            assert!(m.apply(&mut a, &mut b), "{} failed", m);
        }
        (a.to_vec(), b.is_empty())
    }

    fn assert_sorted_by(sorter: &mut ChunkSorter, values: &[i32]) -> Vec<Move> {
        let moves = sorter.sort(values);
        let mut expected = values.to_vec();
        expected.sort_unstable();
        assert_eq!(replay(values, &moves), (expected, true), "{:?}", values);
        moves
    }

    #[test]
    fn test_sorted_input_is_empty() {
        assert!(sort_moves(&[]).is_empty());
        assert!(sort_moves(&[5]).is_empty());
        assert!(sort_moves(&[1, 2, 3, 4, 5, 6, 7]).is_empty());
        assert!(sort_moves(&[-3, 0, 10, 200, 201, 999, 1000, 1001, 5000]).is_empty());
    }

    #[test]
    fn test_small_inputs_use_small_solver() {
        let mut sorter = ChunkSorter::new();
        assert_eq!(sorter.sort(&[3, 2, 1]), vec![Move::Sa, Move::Rra]);
        assert_eq!(sorter.context().statistics.get(Counter::ChunksSolved), 0);
    }

    #[test]
    fn test_one_chunk_per_search() {
        let mut sorter = ChunkSorter::new();
        assert_sorted_by(&mut sorter, &[20, 1, 14, 7, 3, 18, 9, 11, 2, 16]);
        let expected = 10usize.div_ceil(sorter.context().config.max_chunk_size);
        assert_eq!(
            sorter.context().statistics.get(Counter::ChunksSolved),
            expected as u64
        );
    }

    #[test]
    fn test_descending_twenty() {
        let values: Vec<i32> = (1..=20).rev().collect();
        let mut sorter = ChunkSorter::with_config(SearchConfig::default().with_max_chunk_size(7));
        assert_sorted_by(&mut sorter, &values);
        assert_eq!(sorter.context().statistics.get(Counter::ChunksSolved), 3);
    }

    #[test]
    fn test_chunk_size_one() {
        let mut sorter = ChunkSorter::with_config(SearchConfig::default().with_max_chunk_size(1));
        assert_sorted_by(&mut sorter, &[4, 6, 1, 3, 2, 5]);
    }

    #[test]
    fn test_singles_without_local_swaps() {
        let config = SearchConfig::default()
            .with_allowed_moves(MoveSet::SINGLES)
            .with_local_swaps(false);
        let mut sorter = ChunkSorter::with_config(config);
        let moves = assert_sorted_by(&mut sorter, &[8, 3, 6, 1, 7, 2, 5, 4]);
        assert!(moves.iter().all(|m| !m.is_double()));
    }

    #[test]
    fn test_no_adjacent_inverses() {
        let moves = sort_moves(&[9, 4, 12, 1, 7, 3, 11, 2, 8, 6, 10, 5]);
        assert!(moves.windows(2).all(|w| w[1] != w[0].inverse()));
    }

    #[test]
    #[should_panic(expected = "Duplicate value 3")]
    fn test_duplicates_panic() {
        sort_moves(&[1, 3, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_align_head() {
        let chunk = Rc::new(Chunk::new(vec![1, 2, 3, 4, 5]));
        let mut state = MachineState::new(&[4, 5, 1, 2, 3], chunk);
        align_head(&mut state, |v| v == 1);
        assert_eq!(state.history().to_vec(), vec![Move::Ra, Move::Ra]);

        let chunk = Rc::new(Chunk::new(vec![1, 2, 3, 4, 5]));
        let mut state = MachineState::new(&[3, 4, 5, 1, 2], chunk);
        align_head(&mut state, |v| v == 1);
        assert_eq!(state.history().to_vec(), vec![Move::Rra, Move::Rra]);
        assert_eq!(state.a().to_vec(), vec![1, 2, 3, 4, 5]);
    }
}
