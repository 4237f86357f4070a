// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Successor generation.
//!
//! For each allowed move, a successor is the state after that move, provided
//! the move survives the cheap guards, the buffer accepts it and the
//! estimator does not reject the result. When local swaps are enabled, a
//! successor may additionally have one greedy head swap applied. That swap
//! is drawn from the same allowed move set.

use crate::context::SearchContext;
use crate::estimator::{CostEstimator, Estimate};
use crate::machine::{Move, MoveSet, StackBuffer};
use crate::state::statistics::Counter;
use crate::state::MachineState;
use tracing::trace;

/// Why a move was not tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Inverse,
    Chunk,
    Boundary,
}

impl Rejection {
    fn counter(self) -> Counter {
        match self {
            Rejection::Inverse => Counter::InverseRejected,
            Rejection::Chunk => Counter::ChunkRejected,
            Rejection::Boundary => Counter::BoundaryRejected,
        }
    }
}

/// Guards checked before cloning the state.
fn reject(state: &MachineState, m: Move) -> Option<Rejection> {
    let (a, chunk) = (state.a(), state.chunk());
    if state.last_move() == Some(m.inverse()) {
        return Some(Rejection::Inverse);
    }
    if m == Move::Pb && !a.peek().is_some_and(|v| chunk.contains(v)) {
        return Some(Rejection::Chunk);
    }
    if m.swaps_a() && a.len() >= 2 {
        let in_chunk = |i| a.get(i).is_some_and(|v| chunk.contains(v));
        if !(in_chunk(0) && in_chunk(1)) {
            return Some(Rejection::Chunk);
        }
    }
    if m == Move::Pa {
        if let (Some(p), Some(tail)) = (state.boundary(), a.last()) {
            if tail < p {
                return Some(Rejection::Boundary);
            }
        }
    }
    None
}

/// The allowed swap, if any, that fixes an out-of-order head pair of the
/// chunk. Falls back from `ss` to whichever single swap is allowed.
fn local_swap(state: &MachineState, allowed: MoveSet) -> Option<Move> {
    let (a, b, chunk) = (state.a(), state.b(), state.chunk());
    let head_pair = |stack: &StackBuffer| match (stack.get(0), stack.get(1)) {
        (Some(x), Some(y)) if chunk.contains(x) && chunk.contains(y) => Some((x, y)),
        _ => None,
    };
    let swap_a = allowed.contains(Move::Sa) && head_pair(a).is_some_and(|(x, y)| x > y);
    let swap_b = allowed.contains(Move::Sb) && head_pair(b).is_some_and(|(x, y)| x < y);
    match (swap_a, swap_b) {
        (true, true) if allowed.contains(Move::Ss) => Some(Move::Ss),
        (true, _) => Some(Move::Sa),
        (false, true) => Some(Move::Sb),
        (false, false) => None,
    }
}

/// All surviving successors of `state`, each with its estimate set.
pub fn successors<E: CostEstimator>(
    state: &MachineState,
    estimator: &E,
    ctx: &mut SearchContext,
) -> Vec<MachineState> {
    let config = ctx.config;
    let mut result = Vec::with_capacity(config.allowed_moves.len());
    for m in config.allowed_moves.iter() {
        if let Some(rejection) = reject(state, m) {
            trace!(?m, ?rejection, "move rejected");
            ctx.statistics.increment(rejection.counter());
            continue;
        }
        let mut next = state.clone();
        if !next.apply(m) {
            ctx.statistics.increment(Counter::FailedMoves);
            continue;
        }
        let mut estimate = estimator.estimate(&next, &mut ctx.rotations);
        if estimate.is_valid() && config.local_swaps && !m.is_swap() {
            if let Some(swap) = local_swap(&next, config.allowed_moves) {
                if next.apply(swap) {
                    ctx.statistics.increment(Counter::LocalSwaps);
                    estimate = estimator.estimate(&next, &mut ctx.rotations);
                }
            }
        }
        match estimate {
            Estimate::Valid(h) => {
                next.set_heuristic(h);
                ctx.statistics.increment(Counter::Generated);
                result.push(next);
            }
            Estimate::Invalid => {
                trace!(?m, "invalid estimate");
                ctx.statistics.increment(Counter::InvalidEstimates);
            }
        }
    }
    result
}
