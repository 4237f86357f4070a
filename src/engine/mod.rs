// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Best-first search engine.
//!
//! One call to [`SearchEngine::search`] solves one chunk: starting from a
//! state whose active chunk is set, it repeatedly expands the cheapest state
//! in the queue until it pops a goal.
//!
//! # States
//!
//! 1. Initial: the seeded state is estimated and queued.
//! 2. Expanding: pop the cheapest state; if it is a goal, return it. If an
//!    identical configuration was already expanded, drop it. Otherwise queue
//!    its successors.
//! 3. Goal: the popped goal state is returned to the caller.
//! 4. Exhausted: the queue ran dry. Every permutation has a solution, so
//!    this is a defect in the goal test or the successor generator, and the
//!    engine panics.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use pushswap_search::context::SearchContext;
//! use pushswap_search::engine::SearchEngine;
//! use pushswap_search::machine::Chunk;
//! use pushswap_search::state::MachineState;
//!
//! let chunk = Rc::new(Chunk::new(vec![1, 2, 3]));
//! let initial = MachineState::new(&[3, 1, 2], chunk);
//! let mut ctx = SearchContext::new();
//!
//! let goal = SearchEngine::new().search(initial, &mut ctx);
//! assert!(goal.is_goal());
//! ```

pub mod queue;
pub mod successors;

pub use queue::StateQueue;

use crate::context::SearchContext;
use crate::estimator::{CostEstimator, Estimate, MixedEstimator};
use crate::state::statistics::Counter;
use crate::state::MachineState;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Search engine for one chunk at a time, parameterized by its estimator.
#[derive(Debug, Default, Clone)]
pub struct SearchEngine<E = MixedEstimator> {
    estimator: E,
}

impl SearchEngine<MixedEstimator> {
    pub fn new() -> Self {
        Self::with_estimator(MixedEstimator)
    }
}

impl<E: CostEstimator> SearchEngine<E> {
    pub fn with_estimator(estimator: E) -> Self {
        Self { estimator }
    }

    /// Run the search from `initial` to the first goal popped from the queue.
    ///
    /// The rotation cache in `ctx` is cleared first; its hit and miss counts
    /// are added to the statistics when the goal is found.
    ///
    /// # Panics
    ///
    /// Panics if `initial` cannot be estimated, or if the queue empties
    /// without reaching a goal.
    pub fn search(&self, initial: MachineState, ctx: &mut SearchContext) -> MachineState {
        ctx.rotations.clear();
        let mut initial = initial;
        match self.estimator.estimate(&initial, &mut ctx.rotations) {
            Estimate::Valid(h) => initial.set_heuristic(h),
            Estimate::Invalid => panic!(
                "Initial state is invalid for chunk {}: {:?}",
                initial.chunk(),
                initial
            ),
        }
        let start_moves = initial.history().len();
        let chunk = initial.chunk().to_string();

        let mut queue = StateQueue::new();
        let mut visited = FxHashSet::default();
        queue.push(initial);

        while let Some(state) = queue.pop() {
            if state.is_goal() {
                ctx.statistics.increment(Counter::ChunksSolved);
                ctx.statistics.add(Counter::CacheHits, ctx.rotations.hits());
                ctx.statistics.add(Counter::CacheMisses, ctx.rotations.misses());
                debug!(
                    chunk = %chunk,
                    moves = state.history().len() - start_moves,
                    expanded = visited.len(),
                    queued = queue.len(),
                    "chunk solved"
                );
                return state;
            }
            if !visited.insert(state.fingerprint()) {
                ctx.statistics.increment(Counter::Duplicates);
                continue;
            }
            ctx.statistics.increment(Counter::Expanded);
            for next in successors::successors(&state, &self.estimator, ctx) {
                queue.push(next);
            }
        }
        panic!(
            "Search exhausted for chunk {} after expanding {} states",
            chunk,
            visited.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SearchConfig;
    use crate::estimator::cache::RotationCache;
    use crate::machine::{Chunk, Move, MoveSet};
    use std::rc::Rc;

    fn initial(values: &[i32], chunk: &[i32]) -> MachineState {
        MachineState::new(values, Rc::new(Chunk::new(chunk.to_vec())))
    }

    #[test]
    fn test_goal_returned_immediately() {
        let mut ctx = SearchContext::new();
        let goal = SearchEngine::new().search(initial(&[1, 2, 3, 9], &[1, 2, 3]), &mut ctx);
        assert!(goal.history().is_empty());
        assert_eq!(ctx.statistics.get(Counter::ChunksSolved), 1);
        assert_eq!(ctx.statistics.get(Counter::Expanded), 0);
    }

    #[test]
    fn test_solves_one_chunk() {
        let mut ctx = SearchContext::new();
        let goal = SearchEngine::new().search(initial(&[2, 1, 3], &[1, 2, 3]), &mut ctx);
        assert!(goal.is_goal());
        assert_eq!(goal.history().to_vec(), vec![Move::Sa]);
    }

    #[test]
    fn test_solves_with_other_values_present() {
        let mut ctx = SearchContext::new();
        let goal = SearchEngine::new().search(
            initial(&[9, 3, 8, 1, 7, 2, 6], &[1, 2, 3]),
            &mut ctx,
        );
        assert!(goal.is_goal());
        assert!(goal.b().is_empty());
        assert!(ctx.statistics.get(Counter::Expanded) > 0);
    }

    /// An estimator that knows nothing, turning the search into
    /// uniform-cost search.
    struct Blind;

    impl CostEstimator for Blind {
        fn estimate(&self, _state: &MachineState, _cache: &mut RotationCache) -> Estimate {
            Estimate::Valid(0)
        }
    }

    #[test]
    fn test_custom_estimator_finds_shortest() {
        let mut ctx = SearchContext::new();
        let goal =
            SearchEngine::with_estimator(Blind).search(initial(&[3, 2, 1], &[1, 2, 3]), &mut ctx);
        assert!(goal.is_goal());
        assert_eq!(goal.history().len(), 1); // sa gives [2, 3, 1]
    }

    #[test]
    #[should_panic(expected = "Search exhausted")]
    fn test_exhaustion_panics() {
        let mut ctx =
            SearchContext::with_config(SearchConfig::default().with_allowed_moves(MoveSet::EMPTY));
        SearchEngine::new().search(initial(&[2, 1, 3], &[1, 2, 3]), &mut ctx);
    }

    #[test]
    #[should_panic(expected = "Initial state is invalid")]
    fn test_invalid_initial_state_panics() {
        let chunk = Rc::new(Chunk::new(vec![1, 2]));
        let mut state = MachineState::new(&[9, 1, 2], chunk);
        assert!(state.apply(Move::Pb));
        SearchEngine::new().search(state, &mut SearchContext::new());
    }
}
