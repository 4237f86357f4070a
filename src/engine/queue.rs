// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Priority queue of search states.
//!
//! States come out ordered by total cost (moves so far plus estimate). Among
//! equal totals the lower estimate wins, which deliberately adds a secondary
//! key over plain best-first order: the state closer to the goal is expanded
//! first. Remaining ties come out in insertion order, so a search is
//! deterministic.

use crate::state::MachineState;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry {
    total_cost: u32,
    heuristic: u32,
    seq: u64,
    state: MachineState,
}

impl Entry {
    fn key(&self) -> (u32, u32, u64) {
        (self.total_cost, self.heuristic, self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // BinaryHeap is a max-heap: reverse so the smallest key is on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

#[derive(Default)]
pub struct StateQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl StateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: MachineState) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            total_cost: state.total_cost(),
            heuristic: state.heuristic(),
            seq,
            state,
        });
    }

    pub fn pop(&mut self) -> Option<MachineState> {
        self.heap.pop().map(|entry| entry.state)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{Chunk, Move};
    use std::rc::Rc;

    fn state(moves: &[Move], heuristic: u32) -> MachineState {
        let mut s = MachineState::new(&[1, 2, 3, 4], Rc::new(Chunk::new(vec![1, 2, 3, 4])));
        for &m in moves {
            assert!(s.apply(m));
        }
        s.set_heuristic(heuristic);
        s
    }

    #[test]
    fn test_lowest_total_first() {
        let mut queue = StateQueue::new();
        queue.push(state(&[], 5));
        queue.push(state(&[Move::Ra], 1));
        queue.push(state(&[], 3));
        let totals: Vec<u32> = std::iter::from_fn(|| queue.pop())
            .map(|s| s.total_cost())
            .collect();
        assert_eq!(totals, vec![2, 3, 5]);
    }

    #[test]
    fn test_ties_prefer_lower_estimate() {
        let mut queue = StateQueue::new();
        queue.push(state(&[], 2));
        queue.push(state(&[Move::Ra, Move::Ra], 0));
        assert_eq!(queue.pop().map(|s| s.heuristic()), Some(0));
    }

    #[test]
    fn test_full_ties_are_fifo() {
        let mut queue = StateQueue::new();
        queue.push(state(&[Move::Ra], 1));
        queue.push(state(&[Move::Rra], 1));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().and_then(|s| s.last_move()), Some(Move::Ra));
        assert_eq!(queue.pop().and_then(|s| s.last_move()), Some(Move::Rra));
        assert!(queue.is_empty());
    }
}
