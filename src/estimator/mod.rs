// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cost estimator for the best-first search.
//!
//! The estimate approximates the number of moves still needed to solve the
//! active chunk. It is not admissible: some components overlap. It is tuned
//! to keep the search narrow, not to guarantee shortest solutions.
//!
//! # Components
//!
//! - `prefix_len`: ascending run of chunk values at the head of A. When a
//!   boundary exists it only counts while the boundary sits at A's tail.
//! - `prefix_inversions`: inversions among the chunk values of A, read
//!   cyclically from the slot after the boundary (or from the smallest chunk
//!   value when there is no boundary).
//! - `b_inversions`: pairs of B out of descending order, read cyclically
//!   from B's maximum.
//! - `transfer_cost`: every chunk value of A outside the kept run must be
//!   pushed and pulled back, every value of B must be pulled.
//! - `travel_cost`: rotations of A needed to visit every such value and
//!   return to the run's start.
//! - `b_alignment`: rotations of B needed to bring its maximum to the top.
//! - `next_cost`: the cheaper of the next push (`push_cost`) or the next
//!   pull (`pull_cost`), including the rotations that line it up.
//!
//! The estimate is
//! `prefix_inversions + b_inversions + transfer_cost
//!  + max(travel_cost, b_alignment, next_cost)`,
//! and exactly 0 when B is empty and the whole chunk is the head prefix.

pub mod cache;

use crate::machine::{Chunk, StackBuffer};
use crate::state::MachineState;
use cache::RotationCache;
use smallvec::SmallVec;

/// Positions or values of one chunk; chunks are small.
type ChunkVec<T> = SmallVec<[T; 16]>;

/// Result of estimating a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimate {
    /// Approximate number of moves still needed.
    Valid(u32),
    /// The state cannot lead to a goal and must be pruned.
    Invalid,
}

impl Estimate {
    pub fn value(self) -> Option<u32> {
        match self {
            Estimate::Valid(h) => Some(h),
            Estimate::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Estimate::Valid(_))
    }
}

/// A heuristic for the best-first search.
///
/// The cache is scoped to one chunk search; implementations may use it to
/// memoize anything keyed by the contents of B.
pub trait CostEstimator {
    fn estimate(&self, state: &MachineState, cache: &mut RotationCache) -> Estimate;
}

/// The default estimator, mixing push and pull costs.
#[derive(Debug, Default, Clone, Copy)]
pub struct MixedEstimator;

impl CostEstimator for MixedEstimator {
    fn estimate(&self, state: &MachineState, cache: &mut RotationCache) -> Estimate {
        let (a, b, chunk) = (state.a(), state.b(), state.chunk());
        if b.iter().any(|v| !chunk.contains(v)) || (b.is_full() && b.len() != chunk.len()) {
            return Estimate::Invalid;
        }
        let prefix = prefix_len(state);
        if b.is_empty() && prefix == chunk.len() {
            return Estimate::Valid(0);
        }

        let layout = Layout::of(state);
        let next = next_cost(push_cost(state, prefix, cache), pull_cost(state, prefix));
        let rotations = layout
            .travel_cost(a.len())
            .max(b_alignment(state))
            .max(next);
        Estimate::Valid(
            prefix_inversions(state)
                + b_inversions(state)
                + layout.transfer_cost(b.len())
                + rotations,
        )
    }
}

/// Length of the ascending run of chunk values at the head of A.
///
/// With a boundary, the run only counts when the boundary is A's last value,
/// so that the run directly extends the sorted region.
pub fn prefix_len(state: &MachineState) -> usize {
    let (a, chunk) = (state.a(), state.chunk());
    if let Some(p) = state.boundary() {
        if a.last() != Some(p) {
            return 0;
        }
    }
    let mut previous: Option<i32> = None;
    a.iter()
        .take_while(|&v| {
            let extends = chunk.contains(v) && previous.map_or(true, |prev| prev <= v);
            previous = Some(v);
            extends
        })
        .count()
}

/// Inversions among the chunk values still in A.
pub fn prefix_inversions(state: &MachineState) -> u32 {
    let (a, chunk) = (state.a(), state.chunk());
    let start = boundary_anchor(state).unwrap_or_else(|| {
        a.iter()
            .enumerate()
            .filter(|&(_, v)| chunk.contains(v))
            .min_by_key(|&(_, v)| v)
            .map_or(0, |(i, _)| i)
    });
    let values: ChunkVec<i32> = a.cyclic_iter(start).filter(|&v| chunk.contains(v)).collect();
    count_pairs(&values, |x, y| x > y)
}

/// Pairs of B that are out of descending order, read from B's maximum.
pub fn b_inversions(state: &MachineState) -> u32 {
    let b = state.b();
    let Some(start) = max_index(b) else {
        return 0;
    };
    let values: ChunkVec<i32> = b
        .cyclic_iter(start)
        .filter(|&v| state.chunk().contains(v))
        .collect();
    count_pairs(&values, |x, y| x < y)
}

/// Rotations of B needed to bring its maximum to the top.
pub fn b_alignment(state: &MachineState) -> u32 {
    let b = state.b();
    max_index(b).map_or(0, |k| k.min(b.len() - k) as u32)
}

/// Cheapest way to push one more chunk value from A into its place in B.
///
/// For each chunk value of A below the prefix, combines the rotations of A
/// that bring it to the top with the rotations of B that expose its
/// insertion point, plus the push itself. None when there is nothing to push.
pub fn push_cost(state: &MachineState, prefix: usize, cache: &mut RotationCache) -> Option<u32> {
    let (a, b, chunk) = (state.a(), state.b(), state.chunk());
    let fingerprint = b.fingerprint();
    (prefix..a.len())
        .filter_map(|i| a.get(i).filter(|&v| chunk.contains(v)).map(|v| (i, v)))
        .map(|(i, v)| {
            let j = cache.insertion_index(b, fingerprint, v);
            rotation_cost(i, j, a.len(), b.len()) + 1
        })
        .min()
}

/// Cheapest way to pull one value of B onto A.
///
/// When there is no prefix and a boundary exists, A must first be rotated
/// until the boundary is its last value. Pulling a value larger than the
/// head of a non-empty prefix costs one more, since it breaks the prefix.
/// None when B is empty.
pub fn pull_cost(state: &MachineState, prefix: usize) -> Option<u32> {
    let (a, b) = (state.a(), state.b());
    let a_rotation = match boundary_anchor(state) {
        Some(anchor) if prefix == 0 => anchor,
        _ => 0,
    };
    let head = a.peek();
    b.iter()
        .enumerate()
        .map(|(k, v)| {
            let breaks_prefix = prefix > 0 && head.is_some_and(|h| v > h);
            rotation_cost(a_rotation, k, a.len(), b.len()) + 1 + breaks_prefix as u32
        })
        .min()
}

/// The smaller of the push and pull costs that exist, or 0.
pub fn next_cost(push: Option<u32>, pull: Option<u32>) -> u32 {
    match (push, pull) {
        (Some(push), Some(pull)) => push.min(pull),
        (Some(cost), None) | (None, Some(cost)) => cost,
        (None, None) => 0,
    }
}

/// Fewest moves that bring position `i` of A and position `j` of B to the
/// top together, rotating each stack forward or backward and sharing
/// rotations through `rr` and `rrr` when both go the same way.
pub fn rotation_cost(i: usize, j: usize, a_len: usize, b_len: usize) -> u32 {
    let (back_i, back_j) = (backward(a_len, i), backward(b_len, j));
    let cost = i
        .max(j)
        .min(back_i.max(back_j))
        .min(i + back_j)
        .min(back_i + j);
    cost as u32
}

fn backward(len: usize, index: usize) -> usize {
    if index == 0 {
        0
    } else {
        len - index
    }
}

/// Position in A just after the boundary, if there is one in A.
fn boundary_anchor(state: &MachineState) -> Option<usize> {
    let a = state.a();
    let p = state.boundary()?;
    a.index_of(p).map(|i| (i + 1) % a.len())
}

fn max_index(buffer: &StackBuffer) -> Option<usize> {
    buffer.max().and_then(|m| buffer.index_of(m))
}

fn count_pairs(values: &[i32], out_of_order: impl Fn(i32, i32) -> bool) -> u32 {
    let mut count = 0;
    for (i, &x) in values.iter().enumerate() {
        count += values[i + 1..].iter().filter(|&&y| out_of_order(x, y)).count() as u32;
    }
    count
}

/// Where the chunk's values sit in A relative to the run that can stay put.
#[derive(Debug)]
struct Layout {
    /// Position where the kept run starts, which pulls must return to.
    anchor: Option<usize>,
    /// Positions of chunk values in A outside the kept run, ascending.
    pending: ChunkVec<usize>,
}

impl Layout {
    /// With a boundary the kept run starts right after it. Without one, the
    /// longest ascending run of chunk values is kept, the one nearest the
    /// head on ties.
    fn of(state: &MachineState) -> Self {
        let (a, chunk) = (state.a(), state.chunk());
        let len = a.len();
        let kept = match boundary_anchor(state) {
            Some(start) => Some((start, run_len(a, chunk, start))),
            None => longest_run(a, chunk),
        };
        let in_run = |i: usize| kept.is_some_and(|(start, run)| (i + len - start) % len < run);
        let pending = (0..len)
            .filter(|&i| a.get(i).is_some_and(|v| chunk.contains(v)) && !in_run(i))
            .collect();
        Self {
            anchor: kept.map(|(start, _)| start),
            pending,
        }
    }

    fn transfer_cost(&self, b_len: usize) -> u32 {
        (2 * self.pending.len() + b_len) as u32
    }

    fn travel_cost(&self, a_len: usize) -> u32 {
        match self.anchor {
            Some(anchor) => sweep_to(&self.pending, anchor, a_len),
            None => sweep(&self.pending, a_len),
        }
    }
}

/// Length of the ascending run of chunk values starting at `start`.
fn run_len(a: &StackBuffer, chunk: &Chunk, start: usize) -> usize {
    let mut previous: Option<i32> = None;
    a.cyclic_iter(start)
        .take_while(|&v| {
            let extends = chunk.contains(v) && previous.map_or(true, |prev| prev < v);
            previous = Some(v);
            extends
        })
        .count()
}

/// Start and length of the longest ascending run of chunk values in A.
fn longest_run(a: &StackBuffer, chunk: &Chunk) -> Option<(usize, usize)> {
    let len = a.len();
    let mut best: Option<(usize, usize)> = None;
    for start in 0..len {
        let Some(v) = a.get(start).filter(|&v| chunk.contains(v)) else {
            continue;
        };
        let continues_run = a
            .get((start + len - 1) % len)
            .is_some_and(|prev| chunk.contains(prev) && prev < v);
        if continues_run && len > 1 {
            continue;
        }
        let run = run_len(a, chunk, start);
        let better = best.map_or(true, |(s, r)| {
            (run, std::cmp::Reverse(start.min(len - start)))
                > (r, std::cmp::Reverse(s.min(len - s)))
        });
        if better {
            best = Some((start, run));
        }
    }
    best
}

/// Fewest rotations that carry the head of a cycle of `len` positions past
/// every position in `points`, ending anywhere.
fn sweep(points: &[usize], len: usize) -> u32 {
    let points: ChunkVec<usize> = points.iter().copied().filter(|&x| x != 0).collect();
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return 0;
    };
    let mut best = last.min(len - first);
    for pair in points.windows(2) {
        let (x, y) = (pair[0], pair[1]);
        best = best.min(2 * x + (len - y)).min(x + 2 * (len - y));
    }
    best as u32
}

/// Fewest rotations that carry the head past every position in `points`
/// and finish with `target` at the head.
///
/// The visited positions form an arc through 0; each choice of the gap left
/// out gives a forward reach and a backward reach, and the walk covers both
/// extremes before settling on the target.
fn sweep_to(points: &[usize], target: usize, len: usize) -> u32 {
    if len == 0 {
        return 0;
    }
    let target = target % len;
    let mut marks: ChunkVec<usize> = points.iter().copied().chain([0, target]).collect();
    marks.sort_unstable();
    marks.dedup();
    let mut best = usize::MAX;
    for (i, &forward) in marks.iter().enumerate() {
        let backward = len - marks.get(i + 1).copied().unwrap_or(len);
        let settle = if target <= forward {
            target
        } else {
            len - target
        };
        best = best.min(2 * (forward + backward) - settle);
    }
    best as u32
}
