// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search state: one node of the best-first search.
//!
//! A [`MachineState`] owns both stacks, the active chunk, the previous
//! chunk's maximum (the boundary of the already-sorted region), the current
//! estimate and the moves that produced it. States are cloned once per tried
//! move; nothing is shared between them except the immutable chunk.
//!
//! Equality and hashing look only at the stack contents, so two states that
//! reach the same configuration by different paths are the same search node.

pub mod statistics;

use crate::history::MoveHistory;
use crate::machine::{Chunk, Move, StackBuffer};
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Clone)]
pub struct MachineState {
    a: StackBuffer,
    b: StackBuffer,
    chunk: Rc<Chunk>,
    /// Maximum of the previously solved chunk, if any.
    boundary: Option<i32>,
    heuristic: u32,
    history: MoveHistory,
}

impl MachineState {
    /// Seed a state with `values` on A (first value on top) and B empty.
    pub fn new(values: &[i32], chunk: Rc<Chunk>) -> Self {
        let capacity = values.len();
        Self {
            a: StackBuffer::from_slice(capacity, values),
            b: StackBuffer::with_capacity(capacity),
            chunk,
            boundary: None,
            heuristic: 0,
            history: MoveHistory::new(),
        }
    }

    /// Make `chunk` the active chunk, with `boundary` the maximum of the
    /// chunk solved before it.
    pub fn set_chunk(&mut self, chunk: Rc<Chunk>, boundary: Option<i32>) {
        self.chunk = chunk;
        self.boundary = boundary;
    }

    pub fn a(&self) -> &StackBuffer {
        &self.a
    }

    pub fn b(&self) -> &StackBuffer {
        &self.b
    }

    pub fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    pub fn boundary(&self) -> Option<i32> {
        self.boundary
    }

    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    pub fn set_heuristic(&mut self, heuristic: u32) {
        self.heuristic = heuristic;
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn into_history(self) -> MoveHistory {
        self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last()
    }

    /// Moves so far plus the estimate of the moves still needed.
    pub fn total_cost(&self) -> u32 {
        self.history.len() as u32 + self.heuristic
    }

    /// Apply `m` and record it. Returns false, changing nothing, if the
    /// move is not possible in this configuration.
    pub fn apply(&mut self, m: Move) -> bool {
        if m.apply(&mut self.a, &mut self.b) {
            self.history.push(m);
            true
        } else {
            false
        }
    }

    /// Hash of both stacks, used as the visited-set key.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Check whether the active chunk is solved.
    ///
    /// B must be empty and the chunk's values must occupy consecutive
    /// positions of A in ascending order, reading A cyclically. When a
    /// boundary exists the run must start right after it, so the chunk
    /// extends the already-sorted region.
    pub fn is_goal(&self) -> bool {
        if !self.b.is_empty() {
            return false;
        }
        let values = self.chunk.values();
        let len = self.a.len();
        let Some(start) = self.a.index_of(values[0]) else {
            return false;
        };
        let in_order = self
            .a
            .cyclic_iter(start)
            .take(values.len())
            .eq(values.iter().copied());
        if !in_order {
            return false;
        }
        match self.boundary {
            Some(p) => self.a.get((start + len - 1) % len) == Some(p),
            None => true,
        }
    }
}

impl PartialEq for MachineState {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl Eq for MachineState {}

impl Hash for MachineState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.hash(state);
        self.b.hash(state);
    }
}

impl fmt::Debug for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineState")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("chunk", &format_args!("{}", self.chunk))
            .field("boundary", &self.boundary)
            .field("g", &self.history.len())
            .field("h", &self.heuristic)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(values: &[i32], chunk: &[i32]) -> MachineState {
        MachineState::new(values, Rc::new(Chunk::new(chunk.to_vec())))
    }

    #[test]
    fn test_new_state() {
        let s = state(&[3, 1, 2], &[1, 2, 3]);
        assert_eq!(s.a().to_vec(), vec![3, 1, 2]);
        assert!(s.b().is_empty());
        assert_eq!(s.b().capacity(), 3);
        assert_eq!(s.total_cost(), 0);
        assert_eq!(s.last_move(), None);
    }

    #[test]
    fn test_apply_records_history() {
        let mut s = state(&[3, 1, 2], &[1, 2, 3]);
        assert!(s.apply(Move::Pb));
        assert!(!s.apply(Move::Rb)); // B has one value
        assert!(s.apply(Move::Ra));
        assert_eq!(s.history().to_vec(), vec![Move::Pb, Move::Ra]);
        s.set_heuristic(4);
        assert_eq!(s.total_cost(), 6);
    }

    #[test]
    fn test_equality_ignores_history() {
        let mut s1 = state(&[1, 2, 3, 4], &[1, 2, 3, 4]);
        let mut s2 = s1.clone();
        s1.apply(Move::Ra);
        s2.apply(Move::Rra);
        s2.apply(Move::Rra);
        s2.apply(Move::Rra);
        s2.set_heuristic(9);
        assert_eq!(s1, s2);
        assert_eq!(s1.fingerprint(), s2.fingerprint());

        // Same multiset of values split differently between the stacks.
        let mut s3 = state(&[1, 2], &[1, 2]);
        let s4 = s3.clone();
        s3.apply(Move::Pb);
        assert_ne!(s3, s4);
        assert_ne!(s3.fingerprint(), s4.fingerprint());
    }

    #[test]
    fn test_goal_anywhere_without_boundary() {
        assert!(state(&[9, 1, 2, 3, 8], &[1, 2, 3]).is_goal());
        // Cyclic run wrapping around the end of A.
        assert!(state(&[2, 3, 9, 8, 1], &[1, 2, 3]).is_goal());
        assert!(!state(&[1, 9, 2, 3], &[1, 2, 3]).is_goal());
        assert!(!state(&[2, 1, 3, 9], &[1, 2, 3]).is_goal());
    }

    #[test]
    fn test_goal_requires_empty_b() {
        let mut s = state(&[1, 2, 3, 9], &[1, 2, 3]);
        assert!(s.is_goal());
        s.apply(Move::Ra);
        s.apply(Move::Ra);
        s.apply(Move::Ra);
        s.apply(Move::Pb);
        assert!(!s.is_goal());
    }

    #[test]
    fn test_goal_anchored_at_boundary() {
        let chunk = Rc::new(Chunk::new(vec![4, 5]));
        let mut s = MachineState::new(&[4, 5, 9, 1, 2, 3], chunk.clone());
        s.set_chunk(chunk.clone(), Some(3));
        assert!(s.is_goal());

        // Run sorted but detached from the boundary.
        let mut s = MachineState::new(&[1, 2, 3, 9, 4, 5], chunk.clone());
        s.set_chunk(chunk, Some(3));
        assert!(!s.is_goal());
    }
}
